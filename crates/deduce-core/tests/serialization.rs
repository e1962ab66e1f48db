//! JSON round-trip tests for the value types

use deduce_core::prelude::*;
use num_bigint::BigInt;
use num_rational::BigRational;

fn round_trip<T>(value: &T) -> T
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    let json = serde_json::to_string(value).expect("serialization failed");
    serde_json::from_str(&json).expect("deserialization failed")
}

#[test]
fn test_number_round_trip() {
    for number in [
        Number::integer(-15),
        Number::float(2.5),
        Number::rational(BigRational::new(BigInt::from(7), BigInt::from(3))),
    ] {
        assert_eq!(round_trip(&number), number);
    }
}

#[test]
fn test_variable_round_trip() {
    let v1 = Variable::new("v1");
    assert_eq!(round_trip(&v1), v1);
    assert_eq!(round_trip(&v1.x()), v1.x());
}

#[test]
fn test_expression_round_trip() {
    let (x, y) = vars![x, y];
    let expression = (5 - 3 * y.clone() + 2 * x.clone()) / 3;
    assert_eq!(round_trip(&expression), expression);

    let literal = Expression::vector(x.clone(), 2);
    assert_eq!(round_trip(&literal), literal);
}

#[test]
fn test_equation_round_trip_recomputes_reflexivity() {
    let x = var!(x);

    let equation = x.equals(1);
    let restored = round_trip(&equation);
    assert_eq!(restored, equation);
    assert!(!restored.is_reflexive());

    let identity = x.equals(x.clone());
    assert!(round_trip(&identity).is_reflexive());
}

#[test]
fn test_equation_set_round_trip() {
    let (x, y) = vars![x, y];
    let eq_set = EquationSet::from_equations([x.equals(1), y.equals(x.clone() + 1)]);
    assert_eq!(round_trip(&eq_set), eq_set);
}

#[test]
fn test_plane_vector_round_trip() {
    let vector = PlaneVector::new(-15, 8);
    assert_eq!(round_trip(&vector), vector);
}

#[test]
fn test_solution_survives_serialization() {
    let (x, y) = vars![x, y];
    let eq_set = EquationSet::from_equations([(2 * x.clone()).equals(1), y.equals(x.clone())]);

    let solutions = LinearEngine::solve_equation_set(&eq_set).unwrap();
    let restored: EquationSet = round_trip(&eq_set);
    let solutions_again = LinearEngine::solve_equation_set(&restored).unwrap();

    assert_eq!(solutions, solutions_again);
}
