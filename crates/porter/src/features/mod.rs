//! The feature set, composed as an explicit static list.

pub mod apply;
pub mod character;
pub mod help;
pub mod info;
pub mod version;

use crate::Router;

/// Register every feature's commands.
pub fn register_all(router: &mut Router) {
    help::register(router);
    info::register(router);
    character::register(router);
    apply::register(router);
    version::register(router);
}
