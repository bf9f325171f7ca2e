pub(crate) mod auth_layout;
pub(crate) mod bulk_action_bar;
pub(crate) mod empty_state;
pub(crate) mod icons;
pub(crate) mod strength_meter;

pub(crate) use auth_layout::AuthLayout;
pub(crate) use bulk_action_bar::BulkActionBar;
pub(crate) use empty_state::EmptyState;
pub(crate) use strength_meter::StrengthMeter;
