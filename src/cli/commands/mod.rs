mod init;
mod lookup;

pub use init::cmd_init;
pub use lookup::cmd_lookup;
