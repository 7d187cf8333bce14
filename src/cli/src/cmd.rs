use libschemadiff::error::SchemaDiffError;

use async_trait::async_trait;

pub mod compare;
pub use compare::CompareCmd;

pub mod schema;
pub use schema::SchemaCmd;

#[async_trait]
pub trait RunCmd {
    fn name(&self) -> &str;
    fn args(&self) -> clap::Command;
    async fn run(&self, args: &clap::ArgMatches) -> Result<(), SchemaDiffError>;
}
