//! Main screen: signed-in header plus the processing form and its result.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered at `/`. Until the first status check settles it shows a loading
//! state; an unauthenticated session swaps in [`LoginPage`], which stays
//! mounted while a sign-in is in flight. A 401 from the
//! processing endpoint hands over to `expire_session`, which alerts and
//! reloads.

#[cfg(test)]
#[path = "workspace_test.rs"]
mod workspace_test;

use coldmail::api::types::ProcessResult;
use coldmail::process::{ProcessForm, ProcessingMethod, validation_message};
use coldmail::session::Session;
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::components::processing_status::ProcessingStatus;
use crate::pages::login::LoginPage;
use crate::state::auth::{WorkspaceView, use_bootstrapped, use_session, workspace_view};
use crate::util::files::BrowserFile;

type FormSignal = RwSignal<ProcessForm<BrowserFile>, LocalStorage>;

fn parse_method(value: &str) -> ProcessingMethod {
    match value {
        "folder" => ProcessingMethod::Folder,
        _ => ProcessingMethod::Upload,
    }
}

fn submit_label(submitting: bool) -> &'static str {
    if submitting { "Processing..." } else { "Generate Email Drafts" }
}

fn signed_in_as(session: &Session) -> String {
    let email = session.user.as_ref().map(|u| u.email.as_str()).unwrap_or_default();
    format!("Signed in as: {email}")
}

/// Which file input an `on:change` handler feeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FileSlot {
    Contacts,
    Templates,
    Resumes,
}

fn apply_selection(form: FormSignal, notice: RwSignal<Option<String>>, slot: FileSlot, files: Vec<BrowserFile>) {
    match slot {
        FileSlot::Contacts => {
            let Some(file) = files.into_iter().next() else {
                form.update(ProcessForm::clear_contact_file);
                return;
            };
            let mut rejected = None;
            form.update(|f| rejected = f.set_contact_file(file).err());
            notice.set(rejected.map(|e| e.to_string()));
        }
        FileSlot::Templates => form.update(|f| f.template_files = files),
        FileSlot::Resumes => form.update(|f| f.resume_files = files),
    }
}

/// `name (size)` lines for what a file input currently holds.
fn selection_labels(form: &ProcessForm<BrowserFile>, slot: FileSlot) -> Vec<String> {
    match slot {
        FileSlot::Contacts => form.contact_file().map(BrowserFile::label).into_iter().collect(),
        FileSlot::Templates => form.template_files.iter().map(BrowserFile::label).collect(),
        FileSlot::Resumes => form.resume_files.iter().map(BrowserFile::label).collect(),
    }
}

#[component]
fn SelectedFiles(form: FormSignal, slot: FileSlot) -> impl IntoView {
    view! {
        <ul class="selected-files">
            {move || {
                form.with(|f| selection_labels(f, slot))
                    .into_iter()
                    .map(|label| view! { <li>{label}</li> })
                    .collect_view()
            }}
        </ul>
    }
}

fn file_input_handler(
    form: FormSignal,
    notice: RwSignal<Option<String>>,
    slot: FileSlot,
) -> impl Fn(leptos::ev::Event) + Copy + 'static {
    #[cfg(feature = "csr")]
    {
        move |ev: leptos::ev::Event| {
            use wasm_bindgen::JsCast;

            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let files = crate::util::files::files_from_input(&input);
            apply_selection(form, notice, slot, files);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (form, notice, slot);
        move |_ev: leptos::ev::Event| {}
    }
}

#[component]
fn ProcessPanel() -> impl IntoView {
    let session = use_session();
    let form: FormSignal = RwSignal::new_local(ProcessForm::default());
    let notice = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);
    let result = RwSignal::new(None::<ProcessResult>);

    let is_folder = move || form.with(|f| f.method == ProcessingMethod::Folder);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let errors = form.with_untracked(|f| f.validate());
        if !errors.is_empty() {
            notice.set(Some(validation_message(&errors)));
            return;
        }
        notice.set(None);
        result.set(None);
        submitting.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            use coldmail::process::ProcessOutcome;

            let resolver = crate::state::auth::resolver(session);
            let snapshot = form.get_untracked();
            let session_id = resolver.current_session_id();
            let response = resolver.backend().submit_process(session_id.as_deref(), &snapshot).await;
            match ProcessOutcome::from_response(response) {
                ProcessOutcome::SessionExpired => {
                    submitting.set(false);
                    resolver.expire_session().await;
                }
                outcome => {
                    result.set(outcome.result().cloned());
                    submitting.set(false);
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = session;
    };

    view! {
        <form class="process-form" on:submit=on_submit>
            <label>
                "Full Name"
                <input
                    type="text"
                    placeholder="e.g., John Smith"
                    prop:value=move || form.with(|f| f.full_name.clone())
                    on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
                />
            </label>
            <label>
                "Phone Number"
                <input
                    type="tel"
                    placeholder="e.g., +1-650-789-4084"
                    prop:value=move || form.with(|f| f.phone_number.clone())
                    on:input=move |ev| form.update(|f| f.phone_number = event_target_value(&ev))
                />
            </label>
            <Show when=move || !form.with(ProcessForm::phone_number_looks_valid)>
                <p class="field-hint">"Please enter a valid phone number"</p>
            </Show>
            <label>
                "LinkedIn Profile URL"
                <input
                    type="url"
                    placeholder="https://www.linkedin.com/in/yourprofile"
                    prop:value=move || form.with(|f| f.linkedin_url.clone())
                    on:input=move |ev| form.update(|f| f.linkedin_url = event_target_value(&ev))
                />
            </label>
            <label>
                "Excel Contact File (.xlsx)"
                <input type="file" accept=".xlsx" on:change=file_input_handler(form, notice, FileSlot::Contacts)/>
            </label>
            <SelectedFiles form=form slot=FileSlot::Contacts/>
            <label>
                "Processing Method"
                <select on:change=move |ev| form.update(|f| f.method = parse_method(&event_target_value(&ev)))>
                    <option value="upload" selected=move || !is_folder()>{ProcessingMethod::Upload.label()}</option>
                    <option value="folder" selected=is_folder>{ProcessingMethod::Folder.label()}</option>
                </select>
            </label>
            <Show
                when=is_folder
                fallback=move || {
                    view! {
                        <label>
                            "Template Files (.txt)"
                            <input
                                type="file"
                                accept=".txt"
                                multiple=true
                                on:change=file_input_handler(form, notice, FileSlot::Templates)
                            />
                        </label>
                        <SelectedFiles form=form slot=FileSlot::Templates/>
                        <label>
                            "Resume Files"
                            <input
                                type="file"
                                accept=".pdf,.doc,.docx"
                                multiple=true
                                on:change=file_input_handler(form, notice, FileSlot::Resumes)
                            />
                        </label>
                        <SelectedFiles form=form slot=FileSlot::Resumes/>
                    }
                }
            >
                <label>
                    "Templates Folder Path"
                    <input
                        type="text"
                        placeholder="/Users/username/Desktop/JobEmailerFiles"
                        prop:value=move || form.with(|f| f.templates_folder_path.clone())
                        on:input=move |ev| form.update(|f| f.templates_folder_path = event_target_value(&ev))
                    />
                </label>
            </Show>
            <Show when=move || notice.with(Option::is_some)>
                <pre class="form-notice">{move || notice.get().unwrap_or_default()}</pre>
            </Show>
            <button class="process-button" type="submit" disabled=move || submitting.get()>
                {move || submit_label(submitting.get())}
            </button>
            <Show when=move || submitting.get()>
                <p class="processing-note">"This may take a few minutes depending on the number of contacts..."</p>
            </Show>
            <small class="process-summary">{move || form.with(ProcessForm::summary)}</small>
        </form>
        {move || result.get().map(|r| view! { <ProcessingStatus result=r/> })}
    }
}

#[component]
pub fn WorkspacePage() -> impl IntoView {
    let session = use_session();
    let bootstrapped = use_bootstrapped();

    let on_logout = move |_ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            crate::state::auth::resolver(session).logout().await;
        });
    };

    // Re-render only when the screen changes, so a login in flight does not
    // remount the login page.
    let screen = Memo::new(move |_| session.with(|s| workspace_view(bootstrapped.get(), s)));

    move || match screen.get() {
        WorkspaceView::Loading => view! {
            <div class="app-loading">
                <p>"Loading application..."</p>
            </div>
        }
        .into_any(),
        WorkspaceView::Login => view! { <LoginPage/> }.into_any(),
        WorkspaceView::Workspace => view! {
            <div class="app">
                <header class="app-header">
                    <h1>"Cold Email Automation"</h1>
                    <div class="user-section">
                        <span class="user-email">{move || session.with(signed_in_as)}</span>
                        <button class="logout-button" on:click=on_logout>"Sign Out"</button>
                    </div>
                </header>
                {move || session.with(|s| s.error.clone()).map(|e| view! { <p class="app-error">{e}</p> })}
                <main class="app-main">
                    <ProcessPanel/>
                </main>
            </div>
        }
        .into_any(),
    }
}
