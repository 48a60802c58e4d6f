use contracts::domain::a002_registration::form::RegistrationForm;
use contracts::enums::facility_type::FacilityType;
use contracts::shared::slug::cities::all_city_names;
use contracts::shared::slug::repair_categories::REPAIR_CATEGORIES;
use contracts::shared::slug::sports::SPORTS;
use contracts::shared::slug::{repair_category_slug_to_name, sport_slug_to_name};
use leptos::prelude::*;
use thaw::*;

use super::fields::{input_field, select_field, textarea_field};
use super::view_model::RegistrationWizardViewModel;

fn type_hint(facility_type: FacilityType) -> &'static str {
    match facility_type {
        FacilityType::Field => "Teren de fotbal, tenis, baschet, padel...",
        FacilityType::Coach => "Antrenor personal sau de club",
        FacilityType::RepairShop => "Service pentru biciclete, rachete, schiuri...",
        FacilityType::EquipmentShop => "Magazin de echipament sportiv",
    }
}

#[component]
pub fn TypeStep(vm: RegistrationWizardViewModel) -> impl IntoView {
    view! {
        <div class="wizard-types">
            {FacilityType::all()
                .into_iter()
                .map(|t| {
                    let selected = move || vm.form.with(|f| f.facility_type == Some(t));
                    view! {
                        <button
                            type="button"
                            class="wizard-type"
                            class:wizard-type-selected=selected
                            on:click=move |_| vm.choose_type(t)
                        >
                            <span class="wizard-type__name">{t.singular_name()}</span>
                            <span class="wizard-type__hint">{type_hint(t)}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
        {move || vm.error_for("facility_type").map(|e| view! { <div class="form__error">{e}</div> })}
    }
}

#[component]
pub fn BasicInfoStep(vm: RegistrationWizardViewModel) -> impl IntoView {
    let is_coach = move || vm.form.with(|f| f.facility_type == Some(FacilityType::Coach));

    view! {
        {input_field(vm, "name", "Nume", "text", "Ex: Baza Sportivă Olimpia",
            |f| f.name.clone(), |f, v| f.name = v)}
        <div class="form__group">
            <label class="form__label" for="city">"Oraș"</label>
            <input
                type="text"
                id="city"
                class="form__input"
                list="wizard-cities"
                placeholder="Ex: Cluj-Napoca"
                prop:value=move || vm.form.with(|f| f.city.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    vm.update("city", move |f| f.city = value);
                }
            />
            <datalist id="wizard-cities">
                {all_city_names()
                    .into_iter()
                    .map(|name| view! { <option value=name></option> })
                    .collect_view()}
            </datalist>
            {move || vm.error_for("city").map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
        {move || {
            let label = if is_coach() { "Adresă (opțional)" } else { "Adresă" };
            input_field(vm, "location", label, "text", "Stradă, număr",
                |f| f.location.clone(), |f, v| f.location = v)
        }}
        {textarea_field(vm, "description", "Descriere", "Spune-le clienților ce oferi",
            |f| f.description.clone(), |f, v| f.description = v)}
    }
}

#[component]
pub fn ContactStep(vm: RegistrationWizardViewModel) -> impl IntoView {
    view! {
        {input_field(vm, "phone", "Telefon", "tel", "0722 123 456",
            |f| f.phone.clone(), |f, v| f.phone = v)}
        {input_field(vm, "email", "Email", "email", "contact@exemplu.ro",
            |f| f.email.clone(), |f, v| f.email = v)}
        {input_field(vm, "website", "Website (opțional)", "url", "https://",
            |f| f.website.clone(), |f, v| f.website = v)}
    }
}

fn sport_options() -> Vec<(String, String)> {
    SPORTS
        .iter()
        .map(|(slug, name)| (slug.to_string(), name.to_string()))
        .collect()
}

#[component]
pub fn DetailsStep(vm: RegistrationWizardViewModel) -> impl IntoView {
    move || {
        let facility_type = vm.form.with(|f| f.facility_type);
        match facility_type {
            Some(FacilityType::Field) => view! {
                {select_field(vm, "sport", "Sport", sport_options(),
                    |f| f.sport.clone(), |f, v| f.sport = v)}
                {input_field(vm, "price_per_hour", "Preț pe oră (lei)", "text", "Ex: 120",
                    |f| f.price_per_hour.clone(), |f, v| f.price_per_hour = v)}
            }
            .into_any(),
            Some(FacilityType::Coach) => view! {
                {select_field(vm, "sport", "Sport", sport_options(),
                    |f| f.sport.clone(), |f, v| f.sport = v)}
                {input_field(vm, "price_per_lesson", "Preț pe ședință (lei)", "text", "Ex: 150",
                    |f| f.price_per_lesson.clone(), |f, v| f.price_per_lesson = v)}
                {input_field(vm, "specialization", "Specializare", "text", "Ex: copii, începători",
                    |f| f.specialization.clone(), |f, v| f.specialization = v)}
                {input_field(vm, "experience_years", "Ani de experiență", "number", "0",
                    |f| f.experience_years.clone(), |f, v| f.experience_years = v)}
            }
            .into_any(),
            Some(FacilityType::RepairShop) => view! { <RepairCategories vm=vm /> }.into_any(),
            Some(FacilityType::EquipmentShop) => view! {
                {input_field(vm, "category", "Categorie produse", "text", "Ex: ciclism, fitness",
                    |f| f.category.clone(), |f, v| f.category = v)}
            }
            .into_any(),
            None => view! { <p>"Alege mai întâi tipul de facilitate."</p> }.into_any(),
        }
    }
}

#[component]
fn RepairCategories(vm: RegistrationWizardViewModel) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">"Ce reparați?"</label>
            <div class="wizard-checkboxes">
                {REPAIR_CATEGORIES
                    .iter()
                    .map(|(slug, name)| {
                        let slug = *slug;
                        let checked = move || vm.form.with(|f| f.repair_categories.iter().any(|c| c == slug));
                        view! {
                            <label class="wizard-checkbox">
                                <input
                                    type="checkbox"
                                    prop:checked=checked
                                    on:change=move |_| {
                                        vm.update("repair_categories", |f| f.toggle_repair_category(slug))
                                    }
                                />
                                {*name}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
            {move || {
                vm.error_for("repair_categories")
                    .map(|e| view! { <div class="form__error">{e}</div> })
            }}
        </div>
    }
}

/// Строки сводки перед отправкой: (подпись, значение)
pub fn review_rows(form: &RegistrationForm) -> Vec<(&'static str, String)> {
    let mut rows = Vec::new();
    let mut push = |label: &'static str, value: &str| {
        let value = value.trim();
        if !value.is_empty() {
            rows.push((label, value.to_string()));
        }
    };

    if let Some(t) = form.facility_type {
        push("Tip", t.singular_name());
    }
    push("Nume", &form.name);
    push("Oraș", &form.city);
    push("Adresă", &form.location);
    push("Telefon", &form.phone);
    push("Email", &form.email);
    push("Website", &form.website);
    if !form.sport.trim().is_empty() {
        push("Sport", &sport_slug_to_name(form.sport.trim()));
    }
    push("Preț pe oră", &form.price_per_hour);
    push("Preț pe ședință", &form.price_per_lesson);
    push("Specializare", &form.specialization);
    push("Experiență (ani)", &form.experience_years);
    let categories: Vec<String> = form
        .repair_categories
        .iter()
        .map(|c| repair_category_slug_to_name(c))
        .collect();
    push("Reparații", &categories.join(", "));
    push("Categorie", &form.category);
    push("Descriere", &form.description);
    rows
}

#[component]
pub fn ReviewStep(vm: RegistrationWizardViewModel) -> impl IntoView {
    view! {
        <dl class="wizard-review">
            {move || {
                vm.form
                    .with(review_rows)
                    .into_iter()
                    .map(|(label, value)| view! {
                        <dt>{label}</dt>
                        <dd>{value}</dd>
                    })
                    .collect_view()
            }}
        </dl>
    }
}

#[component]
pub fn CredentialsStep(vm: RegistrationWizardViewModel) -> impl IntoView {
    move || {
        vm.credentials.get().map(|c| view! {
            <Card class="wizard-credentials">
                <h3>"Înregistrare reușită!"</h3>
                <p>"Salvează datele de acces, parola nu va mai fi afișată."</p>
                <dl>
                    <dt>"Utilizator"</dt>
                    <dd><code>{c.username}</code></dd>
                    <dt>"Parolă"</dt>
                    <dd><code>{c.password}</code></dd>
                </dl>
            </Card>
        })
    }
}
