use crate::api;
use crate::dto::IncidentRecord;
use crate::state::{self, Draft, MessageKind, STATUS_CLEAR_MS};
use leptos::*;
use std::time::Duration;
use wasm_bindgen_futures::spawn_local;

fn banner_class(message: &str) -> &'static str {
    match state::classify(message) {
        MessageKind::Error => "banner error",
        MessageKind::Success => "banner success",
    }
}

#[component]
pub fn App() -> impl IntoView {
    let records = create_rw_signal(Vec::<IncidentRecord>::new());
    let draft = create_rw_signal(Draft::default());
    let message = create_rw_signal(None::<String>);
    let submitting = create_rw_signal(false);

    let load_records = move || {
        spawn_local(async move {
            match api::list_incidents().await {
                Ok(list) => records.set(list),
                // List stays as-is; the user just sees the last good fetch.
                Err(e) => log::error!("failed to load incidents: {e}"),
            }
        });
    };

    load_records();

    let save = move || {
        if submitting.get_untracked() {
            return;
        }
        let current = draft.get_untracked();
        submitting.set(true);
        spawn_local(async move {
            let outcome = api::create_incident(&current.to_request()).await;
            message.set(Some(state::submit_message(&outcome).to_string()));

            if outcome.is_ok() {
                draft.set(Draft::default());
                load_records();
                set_timeout(
                    move || message.set(None),
                    Duration::from_millis(STATUS_CLEAR_MS),
                );
            }
            submitting.set(false);
        });
    };

    view! {
      <main class="page">
        <header class="page-header">
          <h1>"Portal de Segurança"</h1>
          <p class="meta">"Gestão de Investigações e Incidentes"</p>
        </header>

        <div class="layout">
          <section class="panel">
            <form on:submit=move |ev| {
                ev.prevent_default();
                save();
            }>
              <h2>"Novo Registro"</h2>

              <div class="stack">
                <label>
                  "Título do Evento"
                  <input
                    required
                    placeholder="Ex: Queda de material"
                    prop:value=move || draft.get().title
                    on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                  />
                </label>

                <label>
                  "Localização"
                  <input
                    required
                    placeholder="Ex: Setor de Cargas"
                    prop:value=move || draft.get().location
                    on:input=move |ev| draft.update(|d| d.location = event_target_value(&ev))
                  />
                </label>

                <label>
                  "Descrição"
                  <textarea
                    required
                    placeholder="Descreva o ocorrido..."
                    prop:value=move || draft.get().description
                    on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                  />
                </label>

                <button type="submit" disabled=move || submitting.get()>
                  "Registrar Incidente"
                </button>
              </div>

              <Show
                when=move || message.get().is_some()
                fallback=|| ()
              >
                <div class=move || banner_class(&message.get().unwrap_or_default())>
                  {move || message.get().unwrap_or_default()}
                </div>
              </Show>
            </form>
          </section>

          <section class="panel wide">
            <h2>"Histórico Recente"</h2>

            <Show
              when=move || !records.get().is_empty()
              fallback=|| view! {
                <div class="empty">
                  <p>"Nenhum incidente registrado ainda."</p>
                </div>
              }
            >
              <ul class="cards">
                <For
                  each=move || records.get()
                  key=|r| r.id
                  children=move |r| {
                    let status = r.status_label().to_string();
                    view! {
                      <li class="card">
                        <div class="row">
                          <span class="badge">{status}</span>
                          <span class="meta">{format!("#{}", r.id)}</span>
                        </div>
                        <h3>{r.title.clone()}</h3>
                        <p class="meta">{r.location.clone()}</p>
                      </li>
                    }
                  }
                />
              </ul>
            </Show>
          </section>
        </div>
      </main>
    }
}
