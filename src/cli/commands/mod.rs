mod init;
mod load;
mod serve;

pub use init::cmd_init;
pub use load::cmd_load;
pub use serve::cmd_serve;
