use contracts::domain::a002_registration::form::RegistrationForm;
use leptos::prelude::*;

use super::view_model::RegistrationWizardViewModel;

type Getter = fn(&RegistrationForm) -> String;
type Setter = fn(&mut RegistrationForm, String);

fn field_error(vm: RegistrationWizardViewModel, field: &'static str) -> impl IntoView {
    move || {
        vm.error_for(field)
            .map(|e| view! { <div class="form__error">{e}</div> })
    }
}

/// Поле ввода, привязанное к одному полю формы
pub fn input_field(
    vm: RegistrationWizardViewModel,
    field: &'static str,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    get: Getter,
    set: Setter,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=field>{label}</label>
            <input
                type=input_type
                id=field
                class="form__input"
                class:form__input-invalid=move || vm.error_for(field).is_some()
                placeholder=placeholder
                prop:value=move || vm.form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    vm.update(field, move |f| set(f, value));
                }
            />
            {field_error(vm, field)}
        </div>
    }
}

pub fn textarea_field(
    vm: RegistrationWizardViewModel,
    field: &'static str,
    label: &'static str,
    placeholder: &'static str,
    get: Getter,
    set: Setter,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=field>{label}</label>
            <textarea
                id=field
                class="form__input"
                rows="4"
                placeholder=placeholder
                prop:value=move || vm.form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    vm.update(field, move |f| set(f, value));
                }
            />
            {field_error(vm, field)}
        </div>
    }
}

/// Select with a leading "not chosen" option; `options` are (value, label).
pub fn select_field(
    vm: RegistrationWizardViewModel,
    field: &'static str,
    label: &'static str,
    options: Vec<(String, String)>,
    get: Getter,
    set: Setter,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=field>{label}</label>
            <select
                id=field
                class="form__input"
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    vm.update(field, move |f| set(f, value));
                }
            >
                <option value="">"Alege..."</option>
                {move || {
                    let current = vm.form.with(get);
                    options
                        .clone()
                        .into_iter()
                        .map(|(value, text)| {
                            let selected = value == current;
                            view! { <option value=value selected=selected>{text}</option> }
                        })
                        .collect_view()
                }}
            </select>
            {field_error(vm, field)}
        </div>
    }
}
