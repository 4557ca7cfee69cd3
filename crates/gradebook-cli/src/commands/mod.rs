pub mod add;
pub mod delete;
pub mod init;
pub mod list;
pub mod rank;
pub mod report;
pub mod show;
pub mod sort;
pub mod update;
