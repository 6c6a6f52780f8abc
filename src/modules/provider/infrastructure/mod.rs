pub mod adapters;
pub mod http_client;

pub use adapters::{
    AniZipAdapter, AnifyAdapter, ConsumetAdapter, GogoanimeAdapter, MalSyncAdapter, ZoroAdapter,
};
pub use http_client::JsonClient;
