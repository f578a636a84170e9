use crate::auth::{FormField, ValidationError};
use i18nrs::yew::use_translation;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InputProps {
    pub field: FormField,
    pub value: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub error: Option<ValidationError>,
    pub on_input: Callback<(FormField, String)>,
}

/// Labelled text input bound to one auth form field.
#[function_component(Input)]
pub fn input(props: &InputProps) -> Html {
    let (i18n, _) = use_translation();
    let field = props.field;

    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                on_input.emit((field, input.value()));
            }
        })
    };

    let input_class = classes!(
        "input",
        "input-bordered",
        "w-full",
        props.error.is_some().then_some("input-error")
    );

    html! {
        <div class="form-control">
            <label class="label" for={field.id()}>
                <span class="label-text">{ i18n.t(field.label_key()) }</span>
            </label>
            <input
                id={field.id()}
                name={field.id()}
                class={input_class}
                type={field.input_type()}
                required=true
                aria-invalid={props.error.is_some().to_string()}
                value={props.value.clone()}
                disabled={props.disabled}
                {oninput}
            />
            if let Some(error) = props.error {
                <span class="label-text-alt text-error mt-1">{ i18n.t(error.translation_key()) }</span>
            }
        </div>
    }
}
