use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use pretty_assertions::assert_eq;
use rstest::rstest;
use url_percent_codec::{encoder_for, EncoderProfile, SafeCharSet};

/// The `percent-encoding` crate takes the set of characters to escape.
fn escape_set(safe: SafeCharSet) -> &'static AsciiSet {
    let set = (0u8..128).fold(NON_ALPHANUMERIC.add(b'%'), |set, b| {
        if safe.contains_byte(b) {
            set.remove(b)
        } else {
            set.add(b)
        }
    });
    Box::leak(Box::new(set))
}

#[rstest]
#[case(EncoderProfile::UserInfo, "j.doe:s3cret@", "j.doe%3As3cret%40")]
#[case(EncoderProfile::RegName, "bücher.example", "b%C3%BCcher.example")]
#[case(EncoderProfile::RegName, "host:8080/", "host%3A8080%2F")]
#[case(EncoderProfile::PathSegment, "a b/c;d=e", "a%20b%2Fc%3Bd=e")]
#[case(EncoderProfile::MatrixParam, "k=v;w", "k%3Dv%3Bw")]
#[case(EncoderProfile::QueryParamName, "q&a", "q%26a")]
#[case(EncoderProfile::QueryParamValue, "1+1=2 ?", "1%2B1%3D2%20?")]
#[case(EncoderProfile::UnstructuredQuery, "a=1&b=2+3 #", "a=1&b=2%2B3%20%23")]
#[case(EncoderProfile::Fragment, "sec/1?x=y#z", "sec/1?x=y%23z")]
fn encodes_component(#[case] profile: EncoderProfile, #[case] input: &str, #[case] expected: &str) {
    assert_eq!(encoder_for(profile).encode(input), expected);
    assert_eq!(url_percent_codec::decode(expected).unwrap(), input);
}

#[test]
fn matches_reference_encoder() {
    let inputs = [
        "",
        "plain",
        " !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~",
        "\u{0}\u{1F}\u{7F}",
        "snowman \u{2603} and clef \u{1D11E}",
        "日本語/テキスト?q=値",
    ];

    for profile in EncoderProfile::ALL {
        let encoder = profile.encoder();
        let reference = escape_set(encoder.safe_chars());
        for input in inputs {
            assert_eq!(
                encoder.encode(input),
                utf8_percent_encode(input, reference).to_string(),
                "profile {profile}, input {input:?}"
            );
        }
    }
}

#[test]
fn safe_chars_pass_and_nothing_else_does() {
    let all_ascii: String = (0u8..128).map(char::from).collect();
    for profile in EncoderProfile::ALL {
        let safe = profile.encoder().safe_chars();
        let encoded = profile.encoder().encode(&all_ascii);

        let literals: String = encoded
            .split('%')
            .enumerate()
            .flat_map(|(i, part)| part.chars().skip(if i == 0 { 0 } else { 2 }))
            .collect();
        assert_eq!(literals, safe.iter().collect::<String>(), "{profile}");
    }
}

#[test]
fn escapes_use_uppercase_hex() {
    for profile in EncoderProfile::ALL {
        let encoded = profile.encoder().encode("\u{FF}\u{AB}\n");
        assert_eq!(encoded, "%C3%BF%C2%AB%0A");
        assert_eq!(encoded, profile.encoder().encode("\u{FF}\u{AB}\n"));
    }
}

#[test]
fn profile_names_in_config() -> anyhow::Result<()> {
    let profiles: Vec<EncoderProfile> =
        serde_json::from_str(r#"["user_info", "path_segment", "unstructured_query"]"#)?;
    assert_eq!(
        profiles,
        vec![
            EncoderProfile::UserInfo,
            EncoderProfile::PathSegment,
            EncoderProfile::UnstructuredQuery
        ]
    );

    for profile in EncoderProfile::ALL {
        let json = serde_json::to_string(&profile)?;
        assert_eq!(json, format!("\"{profile}\""));
    }

    assert!(serde_json::from_str::<EncoderProfile>("\"query\"").is_err());
    Ok(())
}
