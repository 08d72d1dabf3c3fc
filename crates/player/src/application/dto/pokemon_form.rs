//! Text-field state shared by the create and edit forms

use pokedex_domain::{
    decode_egg_groups, decode_flavor_text_entries, encode_egg_groups,
    encode_flavor_text_entries, parse_int_lenient, CodecError, DecodePolicy, Pokemon,
    PokemonDraft,
};

/// One text value per input. Numbers and lists stay as typed until submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PokemonForm {
    pub name: String,
    pub base_happiness: String,
    pub capture_rate: String,
    pub color: String,
    pub egg_groups: String,
    pub evolution_chain: String,
    pub flavor_text_entries: String,
}

impl PokemonForm {
    /// Prefill from a stored record. Missing numbers become empty inputs.
    pub fn from_pokemon(pokemon: &Pokemon) -> Self {
        Self {
            name: pokemon.name.clone(),
            base_happiness: number_text(pokemon.base_happiness),
            capture_rate: number_text(pokemon.capture_rate),
            color: pokemon.color.clone(),
            egg_groups: encode_egg_groups(&pokemon.egg_groups),
            evolution_chain: pokemon.evolution_chain.clone(),
            flavor_text_entries: encode_flavor_text_entries(&pokemon.flavor_text_entries),
        }
    }

    /// Build the record to submit under `policy`.
    pub fn to_draft(&self, policy: DecodePolicy) -> Result<PokemonDraft, CodecError> {
        let flavor_text_entries = decode_flavor_text_entries(&self.flavor_text_entries, policy)?;

        Ok(PokemonDraft {
            name: self.name.clone(),
            base_happiness: parse_int_lenient(&self.base_happiness),
            capture_rate: parse_int_lenient(&self.capture_rate),
            color: self.color.clone(),
            egg_groups: decode_egg_groups(&self.egg_groups, policy),
            evolution_chain: self.evolution_chain.clone(),
            flavor_text_entries,
        })
    }
}

fn number_text(value: Option<i64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::fixtures::sample_pokemon;
    use pokedex_domain::FlavorTextEntry;

    fn filled() -> PokemonForm {
        PokemonForm {
            name: "charmander".to_string(),
            base_happiness: "70".to_string(),
            capture_rate: "45".to_string(),
            color: "red".to_string(),
            egg_groups: "monster, dragon".to_string(),
            evolution_chain: "https://pokeapi.co/api/v2/evolution-chain/2/".to_string(),
            flavor_text_entries: "Obviously prefers hot places, en, red".to_string(),
        }
    }

    #[test]
    fn prefills_from_record() {
        let form = PokemonForm::from_pokemon(&sample_pokemon("1", "bulbasaur"));
        assert_eq!(form.name, "bulbasaur");
        assert_eq!(form.base_happiness, "70");
        assert_eq!(form.egg_groups, "monster, plant");
        assert_eq!(
            form.flavor_text_entries,
            "A strange seed was planted on its back at birth., en, red"
        );
    }

    #[test]
    fn missing_numbers_prefill_empty() {
        let mut pokemon = sample_pokemon("1", "bulbasaur");
        pokemon.capture_rate = None;
        let form = PokemonForm::from_pokemon(&pokemon);
        assert_eq!(form.capture_rate, "");
    }

    #[test]
    fn builds_draft_from_valid_form() {
        let draft = filled().to_draft(DecodePolicy::CREATE).unwrap();
        assert_eq!(draft.name, "charmander");
        assert_eq!(draft.base_happiness, Some(70));
        assert_eq!(draft.capture_rate, Some(45));
        assert_eq!(draft.egg_groups, vec!["monster", "dragon"]);
        assert_eq!(
            draft.flavor_text_entries,
            vec![FlavorTextEntry::new("Obviously prefers hot places", "en", "red")]
        );
    }

    #[test]
    fn non_numeric_input_has_no_value() {
        let mut form = filled();
        form.base_happiness = "abc".to_string();
        let draft = form.to_draft(DecodePolicy::CREATE).unwrap();
        assert_eq!(draft.base_happiness, None);
    }

    #[test]
    fn create_requires_flavor_text() {
        let mut form = filled();
        form.flavor_text_entries = String::new();
        assert_eq!(
            form.to_draft(DecodePolicy::CREATE),
            Err(CodecError::IncompleteFlavorText)
        );
        assert!(form.to_draft(DecodePolicy::EDIT).is_ok());
    }

    #[test]
    fn edit_round_trips_unchanged_record() {
        let pokemon = sample_pokemon("1", "bulbasaur");
        let draft = PokemonForm::from_pokemon(&pokemon)
            .to_draft(DecodePolicy::EDIT)
            .unwrap();
        assert_eq!(
            draft,
            PokemonDraft {
                name: pokemon.name,
                base_happiness: pokemon.base_happiness,
                capture_rate: pokemon.capture_rate,
                color: pokemon.color,
                egg_groups: pokemon.egg_groups,
                evolution_chain: pokemon.evolution_chain,
                flavor_text_entries: pokemon.flavor_text_entries,
            }
        );
    }
}
