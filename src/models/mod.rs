pub mod invitation;

pub use invitation::{
    DeliveryOutcome,
    InvitationNotice,
    InviteMode,
    NotifyInviteRequest,
    NotifyInviteResponse,
};
