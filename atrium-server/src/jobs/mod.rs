pub mod unpublish_work;

pub use unpublish_work::UnpublishWorkHandler;
