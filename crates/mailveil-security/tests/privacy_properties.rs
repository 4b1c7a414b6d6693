use mailveil_core::{EmailMessage, MessageType};
use mailveil_security::{
    EMAIL_PLACEHOLDER, PHONE_PLACEHOLDER, anonymize, redact_email_addresses,
    redact_phone_numbers, sanitize_thread,
};
use proptest::prelude::*;

fn address() -> impl Strategy<Value = String> {
    (
        "[a-z]{1,8}",
        proptest::option::of("[a-z]{1,8}"),
        "[a-z]{1,10}",
        "(com|jp|co\\.jp|org)",
    )
        .prop_map(|(family, given, domain, tld)| match given {
            Some(given) => format!("{}.{}@{}.{}", family, given, domain, tld),
            None => format!("{}@{}.{}", family, domain, tld),
        })
}

fn body() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[ぁ-んァ-ン一-龥 、。\n]{0,20}",
            "[A-Za-z0-9 :.\\-+@\n]{0,30}",
            address().prop_map(|a| format!("Email: {}", a)),
            address().prop_map(|a| format!("\n{}\n", a)),
            "0[0-9]{1,3}-[0-9]{2,4}-[0-9]{4}",
            "\\+81 [0-9]{1,4}-[0-9]{4}",
        ],
        0..8,
    )
    .prop_map(|parts| parts.concat())
}

fn message() -> impl Strategy<Value = EmailMessage> {
    (
        address(),
        address(),
        proptest::option::of(prop::collection::vec(address(), 0..3)),
        proptest::option::of(prop::collection::vec(address(), 1..3)),
        "[^\n]{0,20}",
        body(),
    )
        .prop_map(|(from, to, cc, bcc, subject, body)| {
            let mut message = EmailMessage::new(
                from,
                to,
                subject,
                body,
                "2024-01-10T09:00:00Z",
                MessageType::Received,
            );
            message.cc = cc;
            message.bcc = bcc;
            message
        })
}

proptest! {
    #[test]
    fn email_redaction_is_idempotent(text in body()) {
        let once = redact_email_addresses(&text);
        prop_assert_eq!(redact_email_addresses(&once), once);
    }

    #[test]
    fn phone_redaction_is_idempotent(text in body()) {
        let once = redact_phone_numbers(&text);
        prop_assert_eq!(redact_phone_numbers(&once), once);
    }

    #[test]
    fn arbitrary_text_never_panics(text in any::<String>()) {
        let once = redact_phone_numbers(&redact_email_addresses(&text));
        prop_assert_eq!(redact_phone_numbers(&redact_email_addresses(&once)), once);
    }

    #[test]
    fn labels_never_contain_addresses(addr in address()) {
        let label = anonymize(&addr);
        prop_assert!(!label.contains('@'));
        prop_assert_eq!(anonymize(&addr), label);
    }

    #[test]
    fn thread_shape_is_preserved(thread in prop::collection::vec(message(), 0..5)) {
        let sanitized = sanitize_thread(&thread);

        prop_assert_eq!(sanitized.len(), thread.len());
        for (raw, clean) in thread.iter().zip(&sanitized) {
            prop_assert_eq!(&clean.subject, &raw.subject);
            prop_assert_eq!(&clean.date, &raw.date);
            prop_assert_eq!(clean.message_type, raw.message_type);
            prop_assert!(!clean.from.contains('@'));
            prop_assert!(!clean.to.contains('@'));
            prop_assert_eq!(clean.cc.is_some(), raw.cc.is_some());
            if let Some(cc) = &clean.cc {
                prop_assert!(!cc.contains('@'));
            }
            prop_assert!(!clean.body.contains('@') || raw.body.contains('@'));
            let value = serde_json::to_value(clean).unwrap();
            prop_assert!(value.get("bcc").is_none());
        }
    }

    #[test]
    fn sanitized_bodies_are_stable(thread in prop::collection::vec(message(), 1..4)) {
        let sanitized = sanitize_thread(&thread);
        for clean in &sanitized {
            prop_assert_eq!(
                redact_phone_numbers(&redact_email_addresses(&clean.body)),
                clean.body.clone()
            );
        }
    }
}

#[test]
fn literal_cases() {
    assert_eq!(anonymize("yamada.taro@x.com"), "yamada様");
    assert_eq!(anonymize("admin@x.com"), "担当者様");

    let redacted = redact_email_addresses("Email: tanaka.taro@sample.co.jp");
    assert!(redacted.contains(EMAIL_PLACEHOLDER));
    assert!(!redacted.contains("tanaka.taro@sample.co.jp"));

    assert_eq!(redact_phone_numbers("090-8765-4321"), PHONE_PLACEHOLDER);
    assert_eq!(redact_phone_numbers("03-1234-5678"), PHONE_PLACEHOLDER);
}

#[test]
fn addresses_never_leak_from_signatures() {
    let thread = vec![
        EmailMessage::new(
            "yamada@example.com",
            "pm@company.com",
            "プロジェクト計画書の作成について",
            "お疲れ様です。\n\n山田花子\nsample.company@example.com\nメール：hanako.yamada@example.com\n",
            "2024-01-10T09:00:00Z",
            MessageType::Received,
        ),
        EmailMessage::new(
            "pm@company.com",
            "yamada@example.com",
            "Re: プロジェクト計画書の作成について",
            "承知しました。",
            "2024-01-10T14:00:00Z",
            MessageType::Sent,
        ),
    ];

    let sanitized = sanitize_thread(&thread);

    assert_eq!(sanitized.len(), 2);
    assert!(!sanitized[0].body.contains('@'));
    assert!(sanitized[0].body.contains("山田花子"));
    assert_eq!(sanitized[1].body, "承知しました。");
    assert_eq!(sanitized[1].subject, thread[1].subject);
}
