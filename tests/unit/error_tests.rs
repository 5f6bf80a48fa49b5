// Error handling unit tests
// Unknown operations surface immediately; nothing else in the core fails

use thumbor_url::{Builder, BuilderError, Call};

#[test]
fn test_unknown_operation_names_method_and_target() {
    let result = Builder::construct("http://thumbor", "", "a.jpg")
        .call(&"rotate:90".parse::<Call>().unwrap());

    match result {
        Err(BuilderError::MethodNotFound { method, target }) => {
            assert_eq!(method, "rotate");
            assert_eq!(target, "CommandSet");
        }
        other => panic!("expected MethodNotFound, got {:?}", other),
    }
}

#[test]
fn test_unknown_operation_is_reported_and_chain_continues() {
    let calls = ["fitIn:320,240", "sharpen:2", "addFilter:brightness,42"];

    let mut builder = Builder::construct("http://thumbor", "", "a.jpg");
    let mut failures = Vec::new();
    for raw in calls {
        let call: Call = raw.parse().unwrap();
        if let Err(e) = builder.try_call(&call) {
            failures.push(e);
        }
    }

    assert_eq!(failures.len(), 1);
    assert_eq!(
        failures[0].to_string(),
        "Method \"sharpen\" not found for CommandSet"
    );
    assert_eq!(
        builder.render(),
        "http://thumbor/unsafe/fit-in/320x240/filters:brightness(42)/a.jpg"
    );
}

#[test]
fn test_out_of_range_values_are_not_validated() {
    let url = Builder::construct("http://thumbor", "", "a.jpg")
        .resize(-99999, 0)
        .crop(500, 500, 10, 10)
        .add_filter("quality", [1000])
        .render();
    assert_eq!(
        url,
        "http://thumbor/unsafe/500x500:10x10/-99999x0/filters:quality(1000)/a.jpg"
    );
}

#[test]
fn test_empty_secret_is_not_an_error() {
    let url = Builder::construct("http://thumbor", "", "a.jpg").render();
    assert_eq!(url, "http://thumbor/unsafe/a.jpg");
}
