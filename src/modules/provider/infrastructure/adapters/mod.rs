pub mod anify;
pub mod anizip;
pub mod common;
pub mod consumet;
pub mod malsync;
pub mod mapper;
pub mod zoro;

pub use anify::AnifyAdapter;
pub use anizip::AniZipAdapter;
pub use consumet::{ConsumetAdapter, GogoanimeAdapter};
pub use malsync::MalSyncAdapter;
pub use zoro::ZoroAdapter;
