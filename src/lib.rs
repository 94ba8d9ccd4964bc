
pub mod errors;
pub mod faces;
pub mod session;
pub mod events;
pub mod vocabulary;
pub mod composer;
pub mod corpus;
