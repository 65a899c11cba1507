use briefly::core::models::{
    BART_MODEL, DEFAULT_MODEL, DISTILBART_MODEL, ModelChoice, ModelFamily, SummarizationConfig,
    T5_MODEL, resolve_model_name,
};
use briefly::BrieflyError;

#[test]
fn test_resolve_model_name_known_keywords() {
    assert_eq!(resolve_model_name("bart"), BART_MODEL);
    assert_eq!(resolve_model_name("distilbart"), DISTILBART_MODEL);
    assert_eq!(resolve_model_name("t5"), T5_MODEL);
    assert_eq!(resolve_model_name("DistilBART"), DISTILBART_MODEL);
}

#[test]
fn test_resolve_model_name_is_total() {
    for keyword in ["", "gpt", "bart-large", "  ", "t5-small", "pegasus"] {
        let resolved = resolve_model_name(keyword);
        assert!(!resolved.is_empty());
        assert_eq!(resolved, DEFAULT_MODEL, "keyword: {keyword:?}");
    }
}

#[test]
fn test_model_choice_parsing_is_strict() {
    assert_eq!("T5".parse::<ModelChoice>().unwrap(), ModelChoice::T5);
    assert_eq!(ModelChoice::default(), ModelChoice::Bart);

    let err = "Pegasus".parse::<ModelChoice>().unwrap_err();
    assert!(matches!(err, BrieflyError::InvalidArgument(_)));
    assert_eq!(err.to_string(), "Unknown model: pegasus");
}

#[test]
fn test_model_families() {
    assert_eq!(ModelFamily::for_model(BART_MODEL), ModelFamily::Bart);
    assert_eq!(ModelFamily::for_model(DISTILBART_MODEL), ModelFamily::Bart);
    assert_eq!(ModelFamily::for_model(T5_MODEL), ModelFamily::T5);
    assert_eq!(ModelFamily::for_model("google/flan-t5-base"), ModelFamily::T5);
}

#[test]
fn test_config_from_keyword_falls_back() {
    let config = SummarizationConfig::from_keyword("unknown", 80, 10, true);
    assert_eq!(config.model_identifier, DEFAULT_MODEL);
    assert_eq!(config.max_length, 80);
    assert_eq!(config.min_length, 10);
    assert!(config.do_sample);
}

#[test]
fn test_config_validation() {
    assert!(SummarizationConfig::default().validate().is_ok());
    assert!(SummarizationConfig::new(T5_MODEL, 20, 20, false).validate().is_ok());

    let inverted = SummarizationConfig::new(T5_MODEL, 20, 40, false);
    match inverted.validate() {
        Err(BrieflyError::InvalidConfig(msg)) => {
            assert_eq!(msg, "min length 40 exceeds max length 20");
        }
        other => panic!("Unexpected result: {other:?}"),
    }

    let zero = SummarizationConfig::new(T5_MODEL, 0, 0, false);
    assert!(matches!(zero.validate(), Err(BrieflyError::InvalidConfig(_))));

    let unnamed = SummarizationConfig::new(" ", 60, 20, false);
    assert!(matches!(unnamed.validate(), Err(BrieflyError::InvalidConfig(_))));
}
