pub(crate) mod error;
pub(crate) mod home;
pub(crate) mod todo;
pub mod types;

pub(crate) use crate::service::Service;
pub(crate) use types::*;
