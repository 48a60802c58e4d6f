mod fields;
pub mod steps;
pub mod view_model;

use contracts::domain::a002_registration::form::RegistrationStep;
use leptos::prelude::*;
use thaw::*;

use self::steps::{BasicInfoStep, ContactStep, CredentialsStep, DetailsStep, ReviewStep, TypeStep};
use self::view_model::RegistrationWizardViewModel;
use crate::shared::document_meta;
use crate::shared::navigation::use_navigator;

#[component]
pub fn RegistrationWizard() -> impl IntoView {
    let vm = RegistrationWizardViewModel::new();
    let navigator = use_navigator();
    document_meta::set_title("Înscrie-ți facilitatea | SportLocator");

    let step_body = move || match vm.step.get() {
        RegistrationStep::FacilityType => view! { <TypeStep vm=vm /> }.into_any(),
        RegistrationStep::BasicInfo => view! { <BasicInfoStep vm=vm /> }.into_any(),
        RegistrationStep::Contact => view! { <ContactStep vm=vm /> }.into_any(),
        RegistrationStep::Details => view! { <DetailsStep vm=vm /> }.into_any(),
        RegistrationStep::Review => view! { <ReviewStep vm=vm /> }.into_any(),
        RegistrationStep::Credentials => view! { <CredentialsStep vm=vm /> }.into_any(),
    };

    let is_done = move || vm.step.get() == RegistrationStep::Credentials;

    view! {
        <div class="wizard">
            <h1>"Înscrie-ți facilitatea"</h1>

            <ol class="wizard-steps">
                {RegistrationStep::all()
                    .into_iter()
                    .map(|s| {
                        let state = move || {
                            let current = vm.step.get().index();
                            if s.index() == current {
                                "wizard-steps__item wizard-steps__item-active"
                            } else if s.index() < current {
                                "wizard-steps__item wizard-steps__item-done"
                            } else {
                                "wizard-steps__item"
                            }
                        };
                        view! { <li class=state>{s.title()}</li> }
                    })
                    .collect_view()}
            </ol>

            {move || vm.server_error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="wizard-body">{step_body}</div>

            <div class="wizard-actions">
                <Show
                    when=is_done
                    fallback=move || view! {
                        <Show when=move || vm.step.get().previous().is_some()>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.back()>
                                "Înapoi"
                            </Button>
                        </Show>
                        <Show
                            when=move || vm.step.get() == RegistrationStep::Review
                            fallback=move || view! {
                                <Show when=move || vm.step.get() != RegistrationStep::FacilityType>
                                    <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.next()>
                                        "Continuă"
                                    </Button>
                                </Show>
                            }
                        >
                            <Button
                                appearance=ButtonAppearance::Primary
                                loading=vm.submitting
                                disabled=Signal::derive(move || vm.submitting.get())
                                on_click=move |_| vm.submit()
                            >
                                "Trimite înscrierea"
                            </Button>
                        </Show>
                    }
                >
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| navigator.navigate("/toate")>
                        "Înapoi la căutare"
                    </Button>
                </Show>
            </div>
        </div>
    }
}
