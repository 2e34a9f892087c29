/// Session module - Gateway

mod store;

pub use store::{Application, Session, SessionStore, User};
