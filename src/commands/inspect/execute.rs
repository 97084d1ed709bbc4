use std::error::Error;

use super::InspectCmd;
use crate::commands::Execute;
use crate::db::SchemaSource;
use crate::schema::{convert, Conversion};

impl Execute for InspectCmd {
    type Output = Conversion;

    fn execute(self, source: &mut dyn SchemaSource) -> Result<Self::Output, Box<dyn Error>> {
        Ok(convert(source)?)
    }
}
