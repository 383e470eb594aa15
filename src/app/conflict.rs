//! Kooperative Konflikterkennung über Action-Tags.
//!
//! Jeder Far-Grab-Constraint trägt den Tag `grab-<session>`. Ein fremder
//! Tag mit diesem Präfix heißt: jemand anderes hält das Objekt bereits.

use super::ports::{ActionService, HostContext};
use crate::core::{ActionInfo, EntityId};

/// Präfix aller Grab-Tags.
pub const GRAB_TAG_PREFIX: &str = "grab-";

/// Tag der eigenen Session.
pub fn grab_tag(session_id: &str) -> String {
    format!("{GRAB_TAG_PREFIX}{session_id}")
}

/// Gibt es unter `actions` einen Grab-Tag, der nicht `own_tag` ist?
pub fn is_grabbed_by_other(actions: &[ActionInfo], own_tag: &str) -> bool {
    actions
        .iter()
        .any(|action| action.tag != own_tag && action.tag.starts_with(GRAB_TAG_PREFIX))
}

/// Fragt die Actions der Entity ab und prüft auf fremde Grabber.
pub fn entity_is_grabbed_by_other<H>(host: &H, entity: EntityId) -> bool
where
    H: ActionService + HostContext + ?Sized,
{
    let own_tag = grab_tag(host.session_id());
    is_grabbed_by_other(&host.actions(entity), &own_tag)
}
