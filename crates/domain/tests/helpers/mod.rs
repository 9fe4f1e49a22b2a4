mod builders;

pub use builders::ScionAddrBuilder;
