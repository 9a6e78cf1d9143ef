use smartdoc::generation::{CannedGenerator, DocGenerator};

#[test]
fn test_canned_generator_is_deterministic() {
    let generator = CannedGenerator;
    let a = generator.generate("req.a.b(c)").unwrap();
    let b = generator.generate("something else entirely").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_canned_generator_emits_swagger_comment() {
    let comment = CannedGenerator.generate("req.a.b(c)").unwrap();
    assert!(comment.starts_with("/**"));
    assert!(comment.trim_end().ends_with("*/"));
    assert!(comment.contains("@summary"));
    assert!(comment.contains("POST /rest/addresses"));
}

#[test]
fn test_generators_work_as_trait_objects() {
    let generator: Box<dyn DocGenerator> = Box::new(CannedGenerator);
    assert_eq!(generator.name(), "canned");
    assert!(generator.generate("").is_ok());
}
