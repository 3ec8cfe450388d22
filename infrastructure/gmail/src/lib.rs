pub mod client;
pub mod mailbox_provider;
