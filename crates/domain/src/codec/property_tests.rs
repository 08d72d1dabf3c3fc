use proptest::prelude::*;

use super::*;

const POLICIES: [DecodePolicy; 2] = [DecodePolicy::CREATE, DecodePolicy::EDIT];

/// Trimmed, non-empty, and free of both separators
fn arb_token() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z0-9]",
        "[A-Za-z0-9][A-Za-z0-9 .'!é-]{0,12}[A-Za-z0-9]",
    ]
}

fn arb_entry() -> impl Strategy<Value = FlavorTextEntry> {
    (arb_token(), arb_token(), arb_token())
        .prop_map(|(text, language, version)| FlavorTextEntry::new(text, language, version))
}

proptest! {
    #[test]
    fn egg_groups_survive_encode_decode(groups in prop::collection::vec(arb_token(), 0..8)) {
        let encoded = encode_egg_groups(&groups);
        for policy in POLICIES {
            prop_assert_eq!(&decode_egg_groups(&encoded, policy), &groups);
        }
    }

    #[test]
    fn flavor_text_survives_encode_decode(entries in prop::collection::vec(arb_entry(), 1..6)) {
        let encoded = encode_flavor_text_entries(&entries);
        for policy in POLICIES {
            prop_assert_eq!(&decode_flavor_text_entries(&encoded, policy).unwrap(), &entries);
        }
    }

    #[test]
    fn blank_field_is_rejected_on_create_and_dropped_on_edit(
        mut entries in prop::collection::vec(arb_entry(), 1..6),
        index in any::<prop::sample::Index>(),
    ) {
        let blanked = index.index(entries.len());
        entries[blanked].language.clear();
        let encoded = encode_flavor_text_entries(&entries);

        prop_assert_eq!(
            decode_flavor_text_entries(&encoded, DecodePolicy::CREATE),
            Err(CodecError::IncompleteFlavorText)
        );
        entries.remove(blanked);
        prop_assert_eq!(decode_flavor_text_entries(&encoded, DecodePolicy::EDIT).unwrap(), entries);
    }
}
