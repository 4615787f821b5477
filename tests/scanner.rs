use pawn_scanner::{
    scan, scan_accumulate, Address, Argument, Dimension, FunctionInfo, FunctionKind, Intel,
    ScanOptions, Tag,
};

fn scan_default(text: &str) -> Intel {
    scan(text, &ScanOptions::default())
}

fn single_function(text: &str) -> FunctionInfo {
    let intel = scan_default(text);
    assert_eq!(intel.functions.len(), 1, "expected one function in {text:?}: {intel:#?}");
    intel.functions.into_iter().next().unwrap()
}

fn arg() -> Argument {
    Argument {
        name: Some("Arg".into()),
        line: 1,
        ..Default::default()
    }
}

fn tags(names: &[&str]) -> Option<Tag> {
    Some(Tag::Union(names.iter().map(|s| s.to_string()).collect()))
}

fn tag(name: &str) -> Option<Tag> {
    Some(Tag::Single(name.into()))
}

/// Every supported argument form with its decoded value.
fn argument_forms() -> Vec<(&'static str, Argument)> {
    use Dimension::{Expr, Size, Unsized};
    vec![
        ("Arg", arg()),
        ("const Arg", Argument { is_const: true, ..arg() }),
        ("Tag:Arg", Argument { tag: tag("Tag"), ..arg() }),
        ("{Tag1, Tag2, _}:Arg", Argument { tag: tags(&["Tag1", "Tag2", "_"]), ..arg() }),
        ("&Arg", Argument { is_ref: true, ..arg() }),
        ("&Tag:Arg", Argument { is_ref: true, tag: tag("Tag"), ..arg() }),
        (
            "&{Tag1, Tag2, _}:Arg",
            Argument { is_ref: true, tag: tags(&["Tag1", "Tag2", "_"]), ..arg() },
        ),
        ("Arg[]", Argument { dim: vec![Unsized], ..arg() }),
        ("Arg[][]", Argument { dim: vec![Unsized, Unsized], ..arg() }),
        ("Arg[][][]", Argument { dim: vec![Unsized, Unsized, Unsized], ..arg() }),
        ("Arg[1]", Argument { dim: vec![Size(1)], ..arg() }),
        ("Arg[Tag:]", Argument { dim: vec![Expr("Tag:".into())], ..arg() }),
        ("Arg[1][2]", Argument { dim: vec![Size(1), Size(2)], ..arg() }),
        ("Arg[1][2][3]", Argument { dim: vec![Size(1), Size(2), Size(3)], ..arg() }),
        ("Arg[1][][a]", Argument { dim: vec![Size(1), Unsized, Expr("a".into())], ..arg() }),
        ("Arg = 1", Argument { default: Some("1".into()), ..arg() }),
        (
            "Arg[] = {1,2,3}",
            Argument { dim: vec![Unsized], default: Some("{1,2,3}".into()), ..arg() },
        ),
        ("..", Argument { name: None, ..arg() }),
        ("...", Argument { name: None, ..arg() }),
        ("Tag:...", Argument { name: None, tag: tag("Tag"), ..arg() }),
        ("{Tag1, Tag2}:...", Argument { name: None, tag: tags(&["Tag1", "Tag2"]), ..arg() }),
    ]
}

// -- Qualifiers and return tags --

#[test]
fn qualifier_grid() {
    let cases: &[(&str, bool, FunctionKind)] = &[
        ("native", false, FunctionKind::Native),
        ("public", false, FunctionKind::Public),
        ("stock", false, FunctionKind::Stock),
        ("static", false, FunctionKind::Static),
        ("forward", true, FunctionKind::Function),
        ("forward native", true, FunctionKind::Native),
        ("forward public", true, FunctionKind::Public),
        ("forward stock", true, FunctionKind::Stock),
        ("forward static", true, FunctionKind::Static),
    ];
    for &(qualifiers, forward, kind) in cases {
        for return_tag in [None, Some("Tag")] {
            let text = match return_tag {
                Some(t) => format!("{} {}:Function();", qualifiers, t),
                None => format!("{} Function();", qualifiers),
            };
            let func = single_function(&text);
            assert_eq!(func.forward, forward, "{text}");
            assert_eq!(func.kind, kind, "{text}");
            assert_eq!(func.tag.as_deref(), return_tag, "{text}");
            assert_eq!(func.name, "Function");
            assert!(func.args.is_empty());
            assert_eq!(func.addr, None);
        }
    }
}

#[test]
fn body_terminator() {
    let func = single_function("public OnGameModeInit()\n{\n    print(\"hi\");\n    return 1;\n}\n");
    assert_eq!(func.kind, FunctionKind::Public);
    assert_eq!(func.name, "OnGameModeInit");
}

// -- Native redirection --

#[test]
fn native_redirection() {
    let func = single_function("native Function() = OtherFunction;");
    assert_eq!(func.kind, FunctionKind::Native);
    assert_eq!(func.addr, Some(Address::Alias("OtherFunction".into())));

    let func = single_function("native Function() = -1;");
    assert_eq!(func.addr, Some(Address::Number(-1)));

    let func = single_function("native Function() = -9223372036854775808;");
    assert_eq!(func.addr, Some(Address::Number(i64::MIN)));
}

// -- Arguments --

#[test]
fn each_argument_form() {
    for (raw, expected) in argument_forms() {
        let func = single_function(&format!("stock Function({});", raw));
        assert_eq!(func.args, vec![expected], "argument {raw:?}");
    }
}

#[test]
fn all_argument_forms_in_order() {
    let forms = argument_forms();
    let raw: Vec<_> = forms.iter().map(|(r, _)| *r).collect();
    let expected: Vec<_> = forms.into_iter().map(|(_, a)| a).collect();

    let func = single_function(&format!("stock Function({});", raw.join(",")));
    assert_eq!(func.args, expected);
}

#[test]
fn all_argument_forms_reversed() {
    let mut forms = argument_forms();
    forms.reverse();
    let raw: Vec<_> = forms.iter().map(|(r, _)| *r).collect();
    let expected: Vec<_> = forms.into_iter().map(|(_, a)| a).collect();

    let func = single_function(&format!("stock Function({});", raw.join(", ")));
    assert_eq!(func.args, expected);
}

#[test]
fn default_values_with_nested_groups() {
    let func = single_function(
        r#"stock F(const msg[] = "a, (b)", Float:pos[3] = {0.0, 0.0, 0.0}, id = GetId(1, GetOther()));"#,
    );
    let defaults: Vec<_> = func.args.iter().map(|a| a.default.as_deref()).collect();
    assert_eq!(
        defaults,
        [
            Some(r#""a, (b)""#),
            Some("{0.0,0.0,0.0}"),
            Some("GetId(1,GetOther())")
        ]
    );
}

#[test]
fn deeply_nested_dimension() {
    let func = single_function("stock F(a[sizeof(b[c[d[e[0]]]])]);");
    assert_eq!(func.args[0].dim, vec![Dimension::Expr("sizeof(b[c[d[e[0]]]])".into())]);
}

// -- Whitespace invariance --

#[test]
fn spaces_between_tokens_do_not_change_result() {
    let spaced = [
        ("const Arg", "const   Arg"),
        ("const&Arg", "const & Arg"),
        ("const{Tag1, Tag2}:Arg", "const { Tag1 , Tag2 } : Arg"),
        ("&Tag:Arg", "& Tag : Arg"),
        ("{Tag1, Tag2, _}:Arg", "{ Tag1 ,Tag2 , _ } : Arg"),
        ("&{Tag1, Tag2, _}:Arg", "& { Tag1 , Tag2 , _ }:Arg"),
        ("Arg[1][][a]", "Arg [ 1 ] [ ] [ a ]"),
        ("Arg = 1", "Arg=1"),
        ("Arg[] = {1,2,3}", "Arg [ ] = { 1 , 2 , 3 }"),
        ("Tag:...", "Tag : ..."),
        ("Arg[Tag:]", "Arg[ Tag : ]"),
    ];
    for (compact, loose) in spaced {
        let a = single_function(&format!("stock Tag:Function({});", compact));
        let b = single_function(&format!("stock  Tag : Function ( {} ) ;", loose));
        assert_eq!(a, b, "{compact:?} vs {loose:?}");
    }
}

#[test]
fn doubled_spaces_do_not_change_result() {
    let forms = argument_forms();
    let raw: Vec<_> = forms.iter().map(|(r, _)| *r).collect();
    let text = format!("forward public Tag:Function({});", raw.join(", "));
    let doubled = text.replace(' ', "  ");
    assert_eq!(scan_default(&text), scan_default(&doubled));
}

// -- Line attribution --

#[test]
fn line_after_block_comment() {
    let text = "#include <a_samp>\n/* first\n   second\n   third */\nstock Function();\n";
    let func = single_function(text);
    assert_eq!(func.line, 5);
}

#[test]
fn lines_across_many_rewrites() {
    let text = "\
// header comment
#define A \\
    1
/* block
   comment */ forward F();
stock G(a, // trailing
        b) {}
native H() = -1; /* x */ native I();
";
    let intel = scan_default(text);
    let lines: Vec<_> = intel.functions.iter().map(|f| (f.name.as_str(), f.line)).collect();
    assert_eq!(lines, [("F", 5), ("G", 6), ("H", 8), ("I", 8)]);
    assert_eq!(intel.functions[1].args[1].line, 7);
    assert_eq!(intel.macros[0].line, 2);
    assert_eq!(intel.macros[0].substitution.as_deref(), Some("1"));
}

#[test]
fn crlf_line_endings() {
    let intel = scan_default("stock A();\r\n\r\nstock B();\r\n");
    let lines: Vec<_> = intel.functions.iter().map(|f| f.line).collect();
    assert_eq!(lines, [1, 3]);
}

// -- Comments --

#[test]
fn commented_declarations_are_excluded() {
    let text = "// stock Hidden();\n/* native AlsoHidden(); */\nstock Visible();";
    let intel = scan_default(text);
    let names: Vec<_> = intel.functions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["Visible"]);
}

#[test]
fn commented_declarations_with_scan_comments() {
    let text = "// stock Hidden();\n/* native AlsoHidden(); */\nstock Visible();";
    let intel = scan(text, &ScanOptions { scan_comments: true });
    let names: Vec<_> = intel.functions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["Hidden", "AlsoHidden", "Visible"]);
}

// -- Enums --

#[test]
fn enum_with_tag_name_increment() {
    let text = "enum Bits:E_BITS (<<= 1)\n{\n    BIT_A = 1,\n    BIT_B,\n    BIT_C\n}\n";
    let intel = scan_default(text);
    assert_eq!(intel.enums.len(), 1);
    let e = &intel.enums[0];
    assert_eq!(e.tag.as_deref(), Some("Bits"));
    assert_eq!(e.name.as_deref(), Some("E_BITS"));
    assert_eq!(e.increment.as_deref(), Some("<<=1"));
    assert_eq!(e.line, 1);

    let entries: Vec<_> = e
        .variables
        .iter()
        .map(|v| (v.name.as_deref(), v.default.as_deref(), v.line))
        .collect();
    assert_eq!(
        entries,
        [
            (Some("BIT_A"), Some("1"), 3),
            (Some("BIT_B"), None, 4),
            (Some("BIT_C"), None, 5)
        ]
    );
    assert!(e.variables.iter().all(|v| !v.is_const && !v.is_ref));
}

// -- Macros --

#[test]
fn macros_in_order() {
    let text = "#define MAX_PLAYERS (500)\n#define IsValid(%0) ((%0) != INVALID)\n#define GUARD\n";
    let intel = scan_default(text);
    let macros: Vec<_> = intel
        .macros
        .iter()
        .map(|m| (m.prefix.as_str(), m.pattern.as_deref(), m.substitution.as_deref()))
        .collect();
    assert_eq!(
        macros,
        [
            ("MAX_PLAYERS", None, Some("(500)")),
            ("IsValid", Some("(%0)"), Some("((%0) != INVALID)")),
            ("GUARD", None, None)
        ]
    );
}

// -- Accumulation and degradation --

#[test]
fn accumulate_across_texts() {
    let options = ScanOptions::default();
    let intel = scan_accumulate("#define A 1\nstock F();", &options, Intel::default());
    let intel = scan_accumulate("#define B 2\nenum { X }\nstock G();", &options, intel);
    let funcs: Vec<_> = intel.functions.iter().map(|f| f.name.as_str()).collect();
    let macros: Vec<_> = intel.macros.iter().map(|m| m.prefix.as_str()).collect();
    assert_eq!(funcs, ["F", "G"]);
    assert_eq!(macros, ["A", "B"]);
    assert_eq!(intel.enums.len(), 1);
}

#[test]
fn malformed_input_degrades_silently() {
    let text = "stock (;\nnative F(a[) ;\nenum { ;\n\"unterminated\nstock Good();\n";
    let intel = scan_default(text);
    let names: Vec<_> = intel.functions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["Good"]);
    assert!(intel.enums.is_empty());
}

#[test]
fn empty_input() {
    assert!(scan_default("").is_empty());
}
