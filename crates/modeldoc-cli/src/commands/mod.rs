pub mod init;
pub mod list;
pub mod model_to_doc;

pub use init::cmd_init;
pub use list::cmd_list;
pub use model_to_doc::cmd_model_to_doc;
