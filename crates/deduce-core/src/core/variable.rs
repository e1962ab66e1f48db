//! Variable type for unknowns and their named attributes
//!
//! A `Variable` is an interned root name plus an attribute chain. A plain
//! variable has an empty chain; naming an attribute of a variable (for
//! example the `x` component of a planar unknown) appends to the chain.
//! Two variables are equal iff their full chains match.

use crate::error::{DeductionError, DeductionResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

/// Global name interning cache to avoid duplicate Arc allocations
static NAME_CACHE: Lazy<Mutex<HashMap<String, Arc<str>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

fn intern(name: &str) -> Arc<str> {
    let mut cache = NAME_CACHE
        .lock()
        .expect("BUG: name cache lock poisoned - indicates panic during interning in another thread");

    if let Some(existing) = cache.get(name) {
        existing.clone()
    } else {
        let arc_str: Arc<str> = name.into();
        cache.insert(name.to_string(), arc_str.clone());
        arc_str
    }
}

/// A free unknown, or a named attribute of one, with efficient string sharing
///
/// # Examples
///
/// ```rust
/// use deduce_core::Variable;
///
/// let v1 = Variable::new("v1");
/// assert_eq!(v1.name(), "v1");
///
/// let v1_x = v1.x();
/// assert_eq!(v1_x.to_string(), "v1.x");
/// assert_eq!(v1_x.parent(), Some(v1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    name: Arc<str>,
    attributes: Vec<Arc<str>>,
}

impl Variable {
    /// Create a new variable with the given root name
    pub fn new<S: AsRef<str>>(name: S) -> Self {
        Self {
            name: intern(name.as_ref()),
            attributes: Vec::new(),
        }
    }

    /// Create the variable naming an attribute of this one
    ///
    /// The result compares equal to any other variable with the same root
    /// name and attribute chain. Attribute variables are scalars for the
    /// purposes of canonicalization and solving. Attribute names beginning
    /// with an underscore are reserved and rejected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deduce_core::Variable;
    ///
    /// let v = Variable::new("v");
    /// assert_eq!(v.attr("x").unwrap(), v.x());
    /// assert_ne!(v.attr("x").unwrap(), v.attr("y").unwrap());
    /// assert!(v.attr("_hidden").is_err());
    /// ```
    pub fn attr<S: AsRef<str>>(&self, attribute: S) -> DeductionResult<Self> {
        let attribute = attribute.as_ref();
        if attribute.starts_with('_') {
            return Err(DeductionError::InvalidAttribute {
                name: attribute.to_string(),
            });
        }
        Ok(self.push_attribute(attribute))
    }

    fn push_attribute(&self, attribute: &str) -> Self {
        let mut attributes = self.attributes.clone();
        attributes.push(intern(attribute));
        Self {
            name: self.name.clone(),
            attributes,
        }
    }

    /// The `x` component attribute of this variable
    #[inline]
    pub fn x(&self) -> Self {
        self.push_attribute("x")
    }

    /// The `y` component attribute of this variable
    #[inline]
    pub fn y(&self) -> Self {
        self.push_attribute("y")
    }

    /// Get the root name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the attribute chain (empty for a plain variable)
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|a| a.as_ref())
    }

    /// Whether this variable names an attribute of another variable
    #[inline]
    pub fn is_attribute(&self) -> bool {
        !self.attributes.is_empty()
    }

    /// The final attribute name, if any
    pub fn last_attribute(&self) -> Option<&str> {
        self.attributes.last().map(|a| a.as_ref())
    }

    /// The variable this one is an attribute of, if any
    pub fn parent(&self) -> Option<Variable> {
        if self.attributes.is_empty() {
            return None;
        }
        Some(Self {
            name: self.name.clone(),
            attributes: self.attributes[..self.attributes.len() - 1].to_vec(),
        })
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for attribute in &self.attributes {
            write!(f, ".{}", attribute)?;
        }
        Ok(())
    }
}

impl From<&str> for Variable {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Variable {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl Serialize for Variable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Variable", 2)?;
        state.serialize_field("name", &*self.name)?;
        let attributes: Vec<&str> = self.attributes.iter().map(|a| a.as_ref()).collect();
        state.serialize_field("attributes", &attributes)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for Variable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};

        struct VariableVisitor;

        impl<'de> Visitor<'de> for VariableVisitor {
            type Value = Variable;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a Variable struct or string")
            }

            fn visit_str<E>(self, value: &str) -> Result<Variable, E>
            where
                E: de::Error,
            {
                Ok(Variable::new(value))
            }

            fn visit_map<M>(self, mut map: M) -> Result<Variable, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut attributes: Option<Vec<String>> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => {
                            name = Some(map.next_value()?);
                        }
                        "attributes" => {
                            attributes = Some(map.next_value()?);
                        }
                        _ => {
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                let name = name.ok_or_else(|| de::Error::missing_field("name"))?;
                let attributes = attributes.unwrap_or_default();

                if let Some(reserved) = attributes.iter().find(|a| a.starts_with('_')) {
                    return Err(de::Error::custom(format!(
                        "attribute name {} is reserved",
                        reserved
                    )));
                }

                Ok(Variable {
                    name: intern(&name),
                    attributes: attributes.iter().map(|a| intern(a)).collect(),
                })
            }
        }

        deserializer.deserialize_any(VariableVisitor)
    }
}
