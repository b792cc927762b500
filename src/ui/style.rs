use std::fmt;

/// Ordered set of inline CSS declarations. Setting an existing property keeps
/// its position and replaces the value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Style {
    declarations: Vec<(String, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut style = Self::new();
        for (property, value) in pairs {
            style.set(property, value);
        }
        style
    }

    pub fn set(&mut self, property: &str, value: &str) {
        let property = property.trim().to_ascii_lowercase();
        let value = value.trim();
        if property.is_empty() || value.is_empty() {
            return;
        }

        match self
            .declarations
            .iter_mut()
            .find(|(existing, _)| *existing == property)
        {
            Some((_, current)) => *current = value.to_string(),
            None => self.declarations.push((property, value.to_string())),
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        let property = property.trim().to_ascii_lowercase();
        self.declarations
            .iter()
            .find(|(existing, _)| *existing == property)
            .map(|(_, value)| value.as_str())
    }

    /// Returns `self` with every declaration of `overrides` applied on top.
    #[must_use]
    pub fn merged(mut self, overrides: &Style) -> Self {
        for (property, value) in &overrides.declarations {
            self.set(property, value);
        }
        self
    }
}

impl fmt::Display for Style {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (property, value)) in self.declarations.iter().enumerate() {
            if index > 0 {
                formatter.write_str("; ")?;
            }
            write!(formatter, "{property}: {value}")?;
        }
        Ok(())
    }
}
