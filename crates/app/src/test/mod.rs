//! Test context for service-level integration tests.

use tempfile::TempDir;

use crate::domain::{addresses::JsonAddressesService, products::JsonProductsService};

pub struct TestContext {
    _dir: TempDir,
    pub products: JsonProductsService,
    pub addresses: JsonAddressesService,
}

impl TestContext {
    /// Services backed by collection files in a fresh temporary directory.
    pub fn new() -> Result<Self, std::io::Error> {
        let dir = TempDir::new()?;

        Ok(Self {
            products: JsonProductsService::new(dir.path().join("products.json")),
            addresses: JsonAddressesService::new(dir.path().join("addresses.json")),
            _dir: dir,
        })
    }
}
