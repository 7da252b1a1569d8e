pub mod docs;
pub mod prompts;
pub mod server;
