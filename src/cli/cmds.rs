pub mod add;
pub mod export;
pub mod init;
pub mod plot;
pub mod rm;
pub mod root;
pub mod sum;
pub mod view;
