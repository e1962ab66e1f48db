//! Tools for expressing the relation of equation
//!
//! An `Equation` binds two expressions under the `=` relation; it is a
//! proposition, not a boolean. The `reflexive` flag records whether the two
//! sides were structurally identical at construction, so a trivial identity
//! can still be recognized. An `EquationSet` is a deduplicated collection of
//! equations to be solved jointly; iteration order follows insertion but is
//! not part of the contract.

use crate::core::expression::Expression;
use crate::core::variable::Variable;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A proposed equality of two expressions
///
/// # Examples
///
/// ```rust
/// use deduce_core::{Equation, Variable};
///
/// let x = Variable::new("x");
/// let equation: Equation = x.equals(5 - 3 * Variable::new("y"));
/// assert_eq!(equation.to_string(), "x = 5 - (3 * y)");
/// assert!(!equation.is_reflexive());
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Equation {
    subj: Expression,
    obj: Expression,
    reflexive: bool,
}

impl Equation {
    /// Create an equation from its two sides
    ///
    /// The reflexivity flag is computed from structural equality of the
    /// sides.
    pub fn new<S: Into<Expression>, O: Into<Expression>>(subj: S, obj: O) -> Self {
        let subj = subj.into();
        let obj = obj.into();
        let reflexive = subj == obj;
        Self {
            subj,
            obj,
            reflexive,
        }
    }

    /// The subject (left) side
    #[inline]
    pub fn subj(&self) -> &Expression {
        &self.subj
    }

    /// The object (right) side
    #[inline]
    pub fn obj(&self) -> &Expression {
        &self.obj
    }

    /// The relation name, always `=`
    #[inline]
    pub fn relation_name(&self) -> &'static str {
        "="
    }

    /// Whether the two sides were structurally identical
    #[inline]
    pub fn is_reflexive(&self) -> bool {
        self.reflexive
    }
}

// Equality and hashing derive from (subj, obj) only; reflexivity is
// derived data.
impl PartialEq for Equation {
    fn eq(&self, other: &Self) -> bool {
        self.subj == other.subj && self.obj == other.obj
    }
}

impl Eq for Equation {}

impl Hash for Equation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.subj.hash(state);
        self.obj.hash(state);
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subj, self.relation_name(), self.obj)
    }
}

impl<'de> Deserialize<'de> for Equation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct EquationData {
            subj: Expression,
            obj: Expression,
        }

        let data = EquationData::deserialize(deserializer)?;
        Ok(Equation::new(data.subj, data.obj))
    }
}

impl Expression {
    /// Build the equation proposing this expression equals another
    ///
    /// This is the equation-building counterpart of `==`: structural
    /// equality stays boolean for hashing, and `equals` produces the
    /// `Equation` value. The result is reflexive iff the sides are
    /// structurally identical.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deduce_core::{Expression, Variable};
    ///
    /// let x = Expression::from(Variable::new("x"));
    /// assert!(x.equals(x.clone()).is_reflexive());
    /// assert!(!x.equals(Expression::integer(5)).is_reflexive());
    /// ```
    pub fn equals<O: Into<Expression>>(&self, other: O) -> Equation {
        Equation::new(self.clone(), other)
    }
}

impl Variable {
    /// Build the equation proposing this variable equals an expression
    pub fn equals<O: Into<Expression>>(&self, other: O) -> Equation {
        Equation::new(self.clone(), other)
    }
}

/// A deduplicated set of equations
///
/// # Examples
///
/// ```rust
/// use deduce_core::{EquationSet, Variable};
///
/// let (x, y) = (Variable::new("x"), Variable::new("y"));
/// let eq_set = EquationSet::from_equations([
///     x.equals(1),
///     y.equals(x.clone()),
///     x.equals(1),
/// ]);
/// assert_eq!(eq_set.len(), 2);
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct EquationSet {
    equations: Vec<Equation>,
}

impl<'de> Deserialize<'de> for EquationSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct EquationSetData {
            equations: Vec<Equation>,
        }

        let data = EquationSetData::deserialize(deserializer)?;
        Ok(EquationSet::from_equations(data.equations))
    }
}

impl EquationSet {
    /// Create an empty equation set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an equation, returning whether it was newly added
    pub fn insert(&mut self, equation: Equation) -> bool {
        if self.equations.contains(&equation) {
            return false;
        }
        self.equations.push(equation);
        true
    }

    /// Whether the set contains a structurally equal equation
    pub fn contains(&self, equation: &Equation) -> bool {
        self.equations.contains(equation)
    }

    /// Number of distinct equations
    pub fn len(&self) -> usize {
        self.equations.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.equations.is_empty()
    }

    /// Iterate the equations in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Equation> {
        self.equations.iter()
    }

    /// Create an equation set from an iterable of equations
    pub fn from_equations<I: IntoIterator<Item = Equation>>(equations: I) -> Self {
        let mut set = Self::new();
        set.extend(equations);
        set
    }

    /// Create an equation set from `name = expression` assignments
    ///
    /// Each pair becomes an equation whose subject is the variable of that
    /// name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deduce_core::{EquationSet, Expression, Variable};
    ///
    /// let x = Variable::new("x");
    /// let eq_set = EquationSet::from_assignments([
    ///     ("x", Expression::integer(1)),
    ///     ("y", Expression::from(x)),
    /// ]);
    /// assert_eq!(eq_set.len(), 2);
    /// ```
    pub fn from_assignments<I, S, E>(assignments: I) -> Self
    where
        I: IntoIterator<Item = (S, E)>,
        S: AsRef<str>,
        E: Into<Expression>,
    {
        Self::from_equations(
            assignments
                .into_iter()
                .map(|(name, expression)| Equation::new(Variable::new(name), expression)),
        )
    }

    /// Create an equation set from a definition over pre-bound variables
    /// returning `variable = expression` pairs
    ///
    /// Variables are freshly bound to the given names, in order, and handed
    /// to the definition.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deduce_core::{EquationSet, Variable};
    ///
    /// let eq_set = EquationSet::from_dict_def(&["x", "y"], |vars| {
    ///     let (x, y) = (vars[0].clone(), vars[1].clone());
    ///     vec![(x.clone(), 1.into()), (y, (x + 1).into())]
    /// });
    /// assert_eq!(eq_set.len(), 2);
    /// ```
    pub fn from_dict_def<F>(names: &[&str], definition: F) -> Self
    where
        F: FnOnce(&[Variable]) -> Vec<(Variable, Expression)>,
    {
        let variables: Vec<Variable> = names.iter().map(Variable::new).collect();
        Self::from_equations(
            definition(&variables)
                .into_iter()
                .map(|(variable, expression)| Equation::new(variable, expression)),
        )
    }

    /// Create an equation set from a definition over pre-bound variables
    /// returning whole equations
    pub fn from_set_def<F>(names: &[&str], definition: F) -> Self
    where
        F: FnOnce(&[Variable]) -> Vec<Equation>,
    {
        let variables: Vec<Variable> = names.iter().map(Variable::new).collect();
        Self::from_equations(definition(&variables))
    }
}

// Set semantics: equality ignores insertion order.
impl PartialEq for EquationSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|equation| other.contains(equation))
    }
}

impl Eq for EquationSet {}

impl Extend<Equation> for EquationSet {
    fn extend<I: IntoIterator<Item = Equation>>(&mut self, equations: I) {
        for equation in equations {
            self.insert(equation);
        }
    }
}

impl FromIterator<Equation> for EquationSet {
    fn from_iter<I: IntoIterator<Item = Equation>>(equations: I) -> Self {
        Self::from_equations(equations)
    }
}

impl IntoIterator for EquationSet {
    type Item = Equation;
    type IntoIter = std::vec::IntoIter<Equation>;

    fn into_iter(self) -> Self::IntoIter {
        self.equations.into_iter()
    }
}

impl<'a> IntoIterator for &'a EquationSet {
    type Item = &'a Equation;
    type IntoIter = std::slice::Iter<'a, Equation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
