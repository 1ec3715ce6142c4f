use proptest::prelude::*;
use quill_operators::*;
use std::collections::BTreeSet;

#[test]
fn test_every_operator_is_covered() {
    for kind in OperatorKind::ALL {
        let d = descriptor(kind);
        assert!(!d.sign.is_empty(), "{:?} has no sign", kind);
        assert!(!d.usage_example.is_empty(), "{:?} has no example", kind);
        assert!(d.sort_index <= 23);

        // 名称入口与枚举入口一致
        let name = kind.member_name();
        assert_eq!(sign_of_name(name), Ok(sign_of(kind)));
        assert_eq!(sort_index_of_name(name), Ok(sort_index_of(kind)));
        assert_eq!(usage_example_of_name(name), Ok(usage_example_of(kind)));
        assert_eq!(position_of_name(name), Ok(position_of(kind)));
    }
}

#[test]
fn test_sort_index_is_a_bijection() {
    let indices: BTreeSet<u8> = OperatorKind::ALL.iter().map(|k| sort_index_of(*k)).collect();
    assert_eq!(indices.len(), 24);
    assert_eq!(indices, (0..24).collect::<BTreeSet<u8>>());
}

#[test]
fn test_sort_groups() {
    let signs: Vec<&str> = catalog().iter().map(|d| d.sign).collect();
    assert_eq!(
        signs,
        vec![
            "==", "!=", ">", ">=", "<", "<=", "!", // 比较与取反
            "+", "-", "*", "/", "%", "++", "--", "+", "-", // 算术
            "&", "|", "^", "<<", ">>", "~", // 位运算
            "false", "true", // 布尔转换
        ]
    );
}

#[test]
fn test_position_partition() {
    let both = OperatorPosition::PREFIX | OperatorPosition::POSTFIX;

    let mut infix = 0;
    let mut prefix_postfix = 0;
    let mut prefix = 0;
    let mut implicit = 0;
    for kind in OperatorKind::ALL {
        let position = position_of(kind);
        if position == OperatorPosition::INFIX {
            infix += 1;
        } else if position == both {
            prefix_postfix += 1;
        } else if position == OperatorPosition::PREFIX {
            prefix += 1;
        } else if position.is_empty() {
            implicit += 1;
        } else {
            panic!("unexpected position {:?} for {:?}", position, kind);
        }
    }

    assert_eq!(infix, 16);
    assert_eq!(prefix_postfix, 2);
    assert_eq!(prefix, 4);
    assert_eq!(implicit, 2);
}

#[test]
fn test_liftability_truth_table() {
    use TypeCategory::*;

    assert!(is_liftable(
        OperatorKind::Addition,
        &OperandShape::binary(Value, Value, Value)
    ));
    assert!(!is_liftable(
        OperatorKind::Addition,
        &OperandShape::binary(Value, Reference, Value)
    ));
    assert!(!is_liftable(
        OperatorKind::Equality,
        &OperandShape::binary(Value, Value, Value)
    ));
    assert!(is_liftable(
        OperatorKind::Equality,
        &OperandShape::binary(Value, Value, Boolean)
    ));
    assert!(is_liftable(
        OperatorKind::LogicalNot,
        &OperandShape::unary(Value, Value)
    ));
    assert!(!is_liftable(
        OperatorKind::True,
        &OperandShape::unary(Value, Boolean)
    ));
}

#[test]
fn test_unrecognized_name() {
    let err = descriptor_for_name("op_Implicit").unwrap_err();
    assert_eq!(
        err,
        OperatorError::UnrecognizedOperator {
            name: "op_Implicit".to_string()
        }
    );
}

fn any_kind() -> impl Strategy<Value = OperatorKind> {
    (0..OperatorKind::ALL.len()).prop_map(|i| OperatorKind::ALL[i])
}

fn any_category() -> impl Strategy<Value = TypeCategory> {
    prop_oneof![
        Just(TypeCategory::Boolean),
        Just(TypeCategory::Value),
        Just(TypeCategory::Reference),
    ]
}

fn any_shape() -> impl Strategy<Value = OperandShape> {
    (
        prop::collection::vec(any_category(), 0..4),
        any_category(),
        any::<bool>(),
    )
        .prop_map(|(params, ret, intrinsic)| {
            let origin = if intrinsic {
                OperatorOrigin::Intrinsic
            } else {
                OperatorOrigin::UserDefined
            };
            OperandShape::new(params, ret).with_origin(origin)
        })
}

proptest! {
    #[test]
    fn prop_queries_are_idempotent(kind in any_kind(), shape in any_shape()) {
        prop_assert_eq!(descriptor(kind), descriptor(kind));
        prop_assert_eq!(sign_of(kind), sign_of(kind));
        prop_assert_eq!(sort_index_of(kind), sort_index_of(kind));
        prop_assert_eq!(usage_example_of(kind), usage_example_of(kind));
        prop_assert_eq!(position_of(kind), position_of(kind));
        prop_assert_eq!(is_liftable(kind, &shape), is_liftable(kind, &shape));
    }

    #[test]
    fn prop_liftable_implies_value_operands(kind in any_kind(), shape in any_shape()) {
        if is_liftable(kind, &shape) {
            prop_assert_eq!(shape.origin, OperatorOrigin::UserDefined);
            prop_assert!(shape.parameter_types.iter().all(|t| t.is_value_type()));
            prop_assert!(shape.return_type.is_value_type());
            prop_assert!(shape.arity() == 1 || shape.arity() == 2);
            prop_assert!(!matches!(kind, OperatorKind::True | OperatorKind::False));
        }
    }

    #[test]
    fn prop_lifted_signature_agrees(kind in any_kind(), shape in any_shape()) {
        prop_assert_eq!(lifted_signature(kind, &shape).is_some(), is_liftable(kind, &shape));
    }
}
