use tracing::debug;

use super::*;
use crate::cli::{Frequency, ProductForm, UseSetting};
use crate::model::Modifiers;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    pub ingredients: String,
    pub product_form: ProductForm,
    pub use_setting: UseSetting,
    pub frequency: Frequency,
    pub ventilated: bool,
}

impl FormState {
    pub fn modifiers(&self) -> Modifiers {
        Modifiers {
            spray: self.product_form == ProductForm::Spray,
            indoor: self.use_setting == UseSetting::Indoor,
            daily: self.frequency == Frequency::Daily,
            ventilated: self.ventilated,
        }
    }
}

#[derive(Debug)]
pub struct Session<'a> {
    base: &'a KnowledgeBase,
    form: FormState,
    display: DisplayState,
}

impl<'a> Session<'a> {
    pub fn new(base: &'a KnowledgeBase) -> Self {
        Self {
            base,
            form: FormState::default(),
            display: DisplayState::reset(),
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn submit(&mut self) -> &DisplayState {
        let result = engine::evaluate(&self.form.ingredients, self.form.modifiers(), self.base);
        self.display = DisplayState::render(&result, self.base);
        &self.display
    }

    pub fn reset(&mut self) -> &DisplayState {
        debug!("resetting form and display");
        self.form = FormState::default();
        self.display = DisplayState::reset();
        &self.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_maps_selectors_to_modifiers() {
        let form = FormState {
            ingredients: String::new(),
            product_form: ProductForm::Spray,
            use_setting: UseSetting::Indoor,
            frequency: Frequency::Weekly,
            ventilated: true,
        };
        assert_eq!(
            form.modifiers(),
            Modifiers {
                spray: true,
                indoor: true,
                daily: false,
                ventilated: true,
            }
        );
        assert_eq!(FormState::default().modifiers(), Modifiers::default());
    }

    #[test]
    fn submit_overwrites_and_reset_restores_defaults() {
        let base = KnowledgeBase::builtin();
        let mut session = Session::new(&base);
        assert_eq!(session.display(), &DisplayState::reset());

        {
            let form = session.form_mut();
            form.ingredients = "Benzalkonium Chloride, Limonene".to_string();
            form.product_form = ProductForm::Spray;
            form.use_setting = UseSetting::Indoor;
            form.frequency = Frequency::Daily;
        }
        let state = session.submit();
        assert_eq!(state.total_score, 15);
        assert_eq!(state.chip, "High");
        assert_eq!(state.patterns.len(), 6);

        session.form_mut().ingredients = "UnknownChemX".to_string();
        session.form_mut().product_form = ProductForm::Liquid;
        session.form_mut().use_setting = UseSetting::Outdoor;
        session.form_mut().frequency = Frequency::Occasional;
        let state = session.submit();
        assert_eq!(state.total_score, 0);
        assert!(state.patterns.is_empty());
        assert!(state.what_we_dont_know[0].contains("UnknownChemX"));

        let state = session.reset().clone();
        assert_eq!(state, DisplayState::reset());
        assert_eq!(session.form(), &FormState::default());
    }
}
