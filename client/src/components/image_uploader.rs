//! Photo picker that uploads files and reports progress.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the wizard (no token) and by the admin and owner listing
//! editors. Files go through `net::upload::upload_all`, so a failing file
//! never blocks the others. The first image is treated as the cover.

use leptos::prelude::*;

use crate::net::upload::UploadProgress;
use crate::state::ui::UiState;

/// Upload one picked browser file.
#[cfg(feature = "hydrate")]
async fn upload_file(
    token: Option<&str>,
    candidate: crate::net::upload::UploadCandidate<web_sys::File>,
) -> Result<String, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(candidate.payload.array_buffer())
        .await
        .map_err(|e| format!("не удалось прочитать файл: {e:?}"))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let encoded = crate::net::upload::data_url(&candidate.mime, &bytes);
    crate::net::api::upload_photo(token, &encoded, &candidate.mime, &candidate.name).await
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn candidates_from(files: &web_sys::FileList) -> Vec<crate::net::upload::UploadCandidate<web_sys::File>> {
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(|file| crate::net::upload::UploadCandidate {
            name: file.name(),
            mime: file.type_(),
            size: file.size() as u64,
            payload: file,
        })
        .collect()
}

#[component]
pub fn ImageUploader(
    images: Signal<Vec<String>>,
    on_change: Callback<Vec<String>>,
    token: Option<String>,
    #[prop(optional)] multiple: bool,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let progress = RwSignal::new(None::<UploadProgress>);
    let label = label.unwrap_or_else(|| "Загрузить фото".to_owned());

    let on_pick = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            let Some(files) = input.files() else {
                return;
            };
            let candidates = candidates_from(&files);
            input.set_value("");
            if candidates.is_empty() {
                return;
            }
            let token = token.clone();
            leptos::task::spawn_local(async move {
                let report = crate::net::upload::upload_all(
                    candidates,
                    |candidate| {
                        let token = token.clone();
                        async move { upload_file(token.as_deref(), candidate).await }
                    },
                    |p| progress.set(Some(p)),
                )
                .await;
                progress.set(None);

                if !report.uploaded.is_empty() {
                    let mut next = images.get_untracked();
                    if multiple {
                        next.extend(report.uploaded.iter().cloned());
                    } else if let Some(url) = report.uploaded.last() {
                        next = vec![url.clone()];
                    }
                    on_change.run(next);
                }
                if report.failed.is_empty() {
                    ui.update(|u| {
                        u.success(report.summary());
                    });
                } else {
                    let details: Vec<String> = report.failed.iter().map(|(name, why)| format!("{name}: {why}")).collect();
                    ui.update(|u| {
                        u.error(report.summary(), details.join("\n"));
                    });
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&ev, &token, ui, multiple);
        }
    };

    let remove = move |index: usize| {
        let mut next = images.get_untracked();
        if index < next.len() {
            next.remove(index);
            on_change.run(next);
        }
    };
    let make_cover = move |index: usize| {
        let mut next = images.get_untracked();
        if index < next.len() && index > 0 {
            let url = next.remove(index);
            next.insert(0, url);
            on_change.run(next);
        }
    };

    view! {
        <div class="image-uploader">
            <div class="image-uploader__grid">
                {move || {
                    images
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, url)| {
                            view! {
                                <div class="image-uploader__thumb">
                                    <img src=url alt="Фото"/>
                                    {(index == 0).then(|| view! { <span class="badge badge--cover">"Обложка"</span> })}
                                    <div class="image-uploader__actions">
                                        {(index > 0)
                                            .then(|| {
                                                view! {
                                                    <button class="btn btn--small" on:click=move |_| make_cover(index)>
                                                        "Обложка"
                                                    </button>
                                                }
                                            })}
                                        <button class="btn btn--small btn--danger" on:click=move |_| remove(index)>
                                            "Удалить"
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <label class="image-uploader__picker" class=("image-uploader__picker--busy", move || progress.get().is_some())>
                <input type="file" accept="image/*" multiple=multiple on:change=on_pick disabled=move || progress.get().is_some()/>
                <span>{label}</span>
            </label>
            {move || {
                progress
                    .get()
                    .map(|p| {
                        view! {
                            <div class="progress">
                                <div class="progress__bar" style=format!("width: {}%", p.percent())></div>
                                <span class="progress__label">{format!("{} из {}", p.completed, p.total)}</span>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
