mod builders;

pub use builders::DohResponseBuilder;
