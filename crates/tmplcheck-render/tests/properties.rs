use proptest::prelude::*;
use serde_json::{json, Value};
use tmplcheck_render::{parse_data, run, DataFormat, WhitespacePolicy};

fn policy_strategy() -> impl Strategy<Value = WhitespacePolicy> {
    (any::<bool>(), any::<bool>()).prop_map(|(trim, lstrip)| WhitespacePolicy::new(trim, lstrip))
}

// Integers, booleans and strings only: float text does not always survive a
// print/parse cycle unchanged.
fn json_data_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|i| json!(i)),
        "[a-zA-Z0-9 :#-]*".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-zA-Z0-9_ ]*", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn run_never_panics(template in ".{0,64}", data in ".{0,64}", policy in policy_strategy()) {
        let result = run(&template, &data, policy);
        prop_assert_eq!(result.rendered_output().is_some(), result.is_valid());
        prop_assert!(!result.result().is_empty());
    }

    #[test]
    fn rendering_is_deterministic(
        template in "[a-z {}%|.]{0,40}",
        data in json_data_strategy(),
        policy in policy_strategy(),
    ) {
        let text = data.to_string();
        prop_assert_eq!(run(&template, &text, policy), run(&template, &text, policy));
    }

    #[test]
    fn literal_templates_render_verbatim(text in "[a-zA-Z0-9 .,!?()]{0,80}") {
        let result = run(&text, "{}", WhitespacePolicy::default());
        prop_assert_eq!(result.rendered_output(), Some(text.as_str()));
    }

    #[test]
    fn valid_json_is_always_read_as_json(data in json_data_strategy()) {
        let parsed = parse_data(&data.to_string()).unwrap();
        prop_assert_eq!(parsed.format, Some(DataFormat::Json));
        prop_assert_eq!(parsed.value, data);
    }
}
