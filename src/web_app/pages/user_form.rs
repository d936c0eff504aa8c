// web_app/pages/user_form.rs - Add and edit user pages
//
// Mirrors the product forms: the writable user fields go through a server
// function and the outcome lands in a banner, with no local reconciliation.

use crate::web_app::components::*;
use crate::web_app::model::UserDraft;
use crate::web_app::server_fns::{create_user, get_user, update_user};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// The shared field set for both user forms
#[component]
fn UserFormFields(
    firstname: RwSignal<String>,
    lastname: RwSignal<String>,
    email: RwSignal<String>,
    phone: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <label class="block">
                    <span class="text-sm font-medium text-gray-700 mb-1 block">"First Name"</span>
                    <TextInput value=firstname placeholder="First name" />
                </label>
                <label class="block">
                    <span class="text-sm font-medium text-gray-700 mb-1 block">"Last Name"</span>
                    <TextInput value=lastname placeholder="Last name" />
                </label>
            </div>
            <label class="block">
                <span class="text-sm font-medium text-gray-700 mb-1 block">"Email"</span>
                <TextInput value=email input_type="email" placeholder="name@example.com" />
            </label>
            <label class="block">
                <span class="text-sm font-medium text-gray-700 mb-1 block">"Phone"</span>
                <TextInput value=phone input_type="tel" placeholder="1-570-236-7033" />
            </label>
        </div>
    }
}

/// Add user page
#[component]
pub fn AddUserPage() -> impl IntoView {
    let firstname = RwSignal::new(String::new());
    let lastname = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());

    let submit = Action::new(|draft: &UserDraft| {
        let draft = draft.clone();
        async move { create_user(draft).await }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        submit.dispatch(UserDraft {
            firstname: firstname.get(),
            lastname: lastname.get(),
            email: email.get(),
            phone: phone.get(),
        });
    };

    view! {
        <div class="max-w-xl mx-auto px-4 py-8">
            <a href="/users" class="text-sm text-blue-600 hover:underline">
                "← Back to Users"
            </a>
            <h1 class="text-3xl font-bold text-gray-900 mt-2 mb-6">"Add User"</h1>

            <div class="space-y-4 mb-6">
                {move || submit.value().get().map(|result| match result {
                    Ok(user) => view! {
                        <SuccessDisplay message=format!("User \"{}\" submitted", user.full_name()) />
                    }.into_any(),
                    Err(e) => view! { <ErrorDisplay error=e.to_string() /> }.into_any(),
                })}
            </div>

            <form on:submit=on_submit class="bg-white rounded-2xl border border-gray-100 shadow-sm p-6">
                <UserFormFields firstname=firstname lastname=lastname email=email phone=phone />
                <div class="mt-6">
                    <Button button_type="submit">
                        "Add User"
                    </Button>
                </div>
            </form>
        </div>
    }
}

/// Edit user page
#[component]
pub fn EditUserPage() -> impl IntoView {
    let params = use_params_map();
    let id = Signal::derive(move || {
        params
            .get()
            .get("id")
            .and_then(|raw| raw.parse::<i32>().ok())
    });

    let firstname = RwSignal::new(String::new());
    let lastname = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());

    let existing = Resource::new(
        move || id.get(),
        |id| async move {
            match id {
                Some(id) => get_user(id).await,
                None => Err(ServerFnError::new("Invalid user id")),
            }
        },
    );

    // Prefill once the record arrives
    Effect::new(move || {
        if let Some(Ok(user)) = existing.get() {
            firstname.set(user.name.firstname);
            lastname.set(user.name.lastname);
            email.set(user.email);
            phone.set(user.phone);
        }
    });

    let submit = Action::new(|input: &(i32, UserDraft)| {
        let (id, draft) = input.clone();
        async move { update_user(id, draft).await }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = id.get_untracked() else {
            return;
        };
        submit.dispatch((
            id,
            UserDraft {
                firstname: firstname.get(),
                lastname: lastname.get(),
                email: email.get(),
                phone: phone.get(),
            },
        ));
    };

    view! {
        <div class="max-w-xl mx-auto px-4 py-8">
            <a href="/users" class="text-sm text-blue-600 hover:underline">
                "← Back to Users"
            </a>
            <h1 class="text-3xl font-bold text-gray-900 mt-2 mb-6">"Edit User"</h1>

            <Suspense fallback=move || view! { <Loading message="Loading user..." /> }>
                {move || match existing.get() {
                    None => view! { <Loading message="Loading user..." /> }.into_any(),
                    Some(Err(e)) => view! { <ErrorDisplay error=e.to_string() /> }.into_any(),
                    Some(Ok(_)) => view! {
                        <div class="space-y-4 mb-6">
                            {move || submit.value().get().map(|result| match result {
                                Ok(user) => view! {
                                    <SuccessDisplay message=format!("User \"{}\" updated", user.full_name()) />
                                }.into_any(),
                                Err(e) => view! { <ErrorDisplay error=e.to_string() /> }.into_any(),
                            })}
                        </div>

                        <form on:submit=on_submit class="bg-white rounded-2xl border border-gray-100 shadow-sm p-6">
                            <UserFormFields firstname=firstname lastname=lastname email=email phone=phone />
                            <div class="mt-6">
                                <Button button_type="submit">
                                    "Update User"
                                </Button>
                            </div>
                        </form>
                    }.into_any(),
                }}
            </Suspense>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use crate::web_app::model::UserDraft;

    #[test]
    fn test_draft_from_form_fields() {
        let draft = UserDraft {
            firstname: "john".to_string(),
            lastname: "doe".to_string(),
            email: "john@gmail.com".to_string(),
            phone: "1-570-236-7033".to_string(),
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["firstname"], "john");
        assert_eq!(json["phone"], "1-570-236-7033");
    }
}
