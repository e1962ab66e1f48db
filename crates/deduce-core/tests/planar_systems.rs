//! Planar vector system tests

use deduce_core::prelude::*;
use std::collections::HashMap;

fn medium_system() -> (Variable, Variable, Variable, EquationSet) {
    let (v1, v2, v3) = vars![v1, v2, v3];
    let eq_set = EquationSet::from_equations([
        v1.equals(Expression::vector(5, 5) - 3 * v2.clone() + 2 * v3.clone()),
        v1.equals((Expression::vector(7, 7) - 5 * v2.clone() - 6 * v3.clone()) / 3),
        v1.equals((Expression::vector(8, 8) - 4 * v2.clone() - 3 * v3.clone()) / 2),
    ]);
    (v1, v2, v3, eq_set)
}

#[test]
fn test_single_vector_equation() {
    let v1 = var!(v1);
    let eq_set = EquationSet::from_equations([v1.equals(Expression::vector(5, 7))]);

    let solutions = PlanarEngine::solve_equation_set(&eq_set).unwrap();

    assert_eq!(solutions.len(), 1);
    assert_eq!(solutions[&v1], PlaneVector::new(5, 7));
}

#[test]
fn test_medium_vector_system() {
    let (v1, v2, v3, eq_set) = medium_system();

    let solutions = PlanarEngine::solve_equation_set(&eq_set).unwrap();

    assert_eq!(solutions[&v1], PlaneVector::new(-15, -15));
    assert_eq!(solutions[&v2], PlaneVector::new(8, 8));
    assert_eq!(solutions[&v3], PlaneVector::new(2, 2));
}

#[test]
fn test_medium_vector_system_float_method() {
    let (v1, v2, v3, eq_set) = medium_system();

    let solutions = PlanarEngine::solve_equation_set_with(&eq_set, SolveMethod::Float).unwrap();

    for (variable, expected) in [(v1, -15.0), (v2, 8.0), (v3, 2.0)] {
        let vector = &solutions[&variable];
        assert!((vector.x.to_f64() - expected).abs() < 1e-9);
        assert!((vector.y.to_f64() - expected).abs() < 1e-9);
    }
}

#[test]
fn test_asymmetric_components() {
    let (v1, v2) = vars![v1, v2];
    let eq_set = EquationSet::from_equations([
        v1.equals(Expression::vector(1, 2)),
        v2.equals(2 * v1.clone() + Expression::vector(0, 1)),
    ]);

    let solutions = PlanarEngine::solve_equation_set(&eq_set).unwrap();

    assert_eq!(solutions[&v1], PlaneVector::new(1, 2));
    assert_eq!(solutions[&v2], PlaneVector::new(2, 5));
}

#[test]
fn test_solutions_satisfy_original_equations() {
    let (_, _, _, eq_set) = medium_system();
    let solutions = PlanarEngine::solve_equation_set(&eq_set).unwrap();

    let values: HashMap<Variable, Value> = solutions
        .into_iter()
        .map(|(variable, vector)| (variable, Value::from(vector)))
        .collect();

    for equation in &eq_set {
        let subj = PlanarEngine::evaluate_expression(equation.subj(), &values).unwrap();
        let obj = PlanarEngine::evaluate_expression(equation.obj(), &values).unwrap();
        assert_eq!(subj, obj, "substitution broke {}", equation);
    }
}

#[test]
fn test_vector_expression_evaluation() {
    let (v1, v2) = vars![v1, v2];
    let values = HashMap::from([
        (v1.clone(), Value::from(PlaneVector::new(1, 2))),
        (v2.clone(), Value::from(PlaneVector::new(3, 4))),
    ]);

    let vecexp = Expression::vector(v1.x(), v2.y());
    assert_eq!(
        PlanarEngine::evaluate_expression(&vecexp, &values).unwrap(),
        Value::from(PlaneVector::new(1, 4)),
    );

    let opexp = v1 + v2;
    assert_eq!(
        PlanarEngine::evaluate_expression(&opexp, &values).unwrap(),
        Value::from(PlaneVector::new(4, 6)),
    );
}

#[test]
fn test_sides_with_different_dimensions_are_rejected() {
    let v1 = var!(v1);
    // subject is a lone scalar component, object is a full vector
    let eq_set = EquationSet::from_equations([v1.x().equals(v1.clone())]);

    assert_eq!(
        PlanarEngine::solve_equation_set(&eq_set),
        Err(DeductionError::DimensionMismatch {
            expected: 1,
            found: 2,
        }),
    );
}

#[test]
fn test_component_equations_can_pin_scalars() {
    // mixing explicit component equations with vector equations stays planar
    let (v1, v2) = vars![v1, v2];
    let eq_set = EquationSet::from_equations([
        v1.x().equals(1),
        v1.y().equals(2),
        v2.equals(v1.clone() + Expression::vector(1, 1)),
    ]);

    let solutions = PlanarEngine::solve_equation_set(&eq_set).unwrap();
    assert_eq!(solutions[&v1], PlaneVector::new(1, 2));
    assert_eq!(solutions[&v2], PlaneVector::new(2, 3));
}
