use super::*;

use crate::value::Value;

impl Document {
    /// Get a typed value from the configuration using dot notation.
    ///
    /// # Examples
    /// ```no_run
    /// # use strata_cfg::Document;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut config = Document::new();
    /// config.open("config.cfg")?;
    /// let host: String = config.get_as("server.host")?;
    /// let port: u16 = config.get_as("server.port")?;
    /// let debug: bool = config.get_as("debug")?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Returns error if the path doesn't exist or the value can't be
    /// converted to type T.
    pub fn get_as<T>(&self, path: &str) -> Result<T, StrataError>
    where
        T: TryFrom<Value, Error = StrataError>,
    {
        let property = self.get(path).ok_or_else(|| StrataError::not_found(path))?;
        T::try_from(property.value().clone())
    }

    /// Get an optional typed value - returns `None` if the path doesn't
    /// resolve, but still reports conversion failures on values that do.
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, StrataError>
    where
        T: TryFrom<Value, Error = StrataError>,
    {
        match self.get(path) {
            None => Ok(None),
            Some(property) => T::try_from(property.value().clone()).map(Some),
        }
    }

    /// Get a value with a fallback default.
    ///
    /// # Examples
    /// ```no_run
    /// # use strata_cfg::Document;
    /// # let config = Document::new();
    /// let timeout = config.get_or("server.timeout", 30u64);
    /// let debug = config.get_or("debug", false);
    /// ```
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = StrataError>,
    {
        self.get_as(path).unwrap_or(default)
    }
}
