use crate::shared::paging_select::{source_fn, FetchError, PagingSelect};
use contracts::shared::paging_select::{FetchPageArgs, OptionRecord, PageResponse};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::*;

/// Размер демонстрационного каталога
const CATALOG_SIZE: usize = 95;
/// Имитация задержки сети, мс
const LATENCY_MS: u32 = 300;

/// Страница каталога; `related_key` выбирает категорию
fn catalog_page(args: &FetchPageArgs) -> PageResponse<OptionRecord> {
    let category = args.related_key.as_deref().unwrap_or("fruit");
    let start = args.page.saturating_sub(1) * args.limit;
    let end = CATALOG_SIZE.min(start + args.limit);
    let list = (start..end)
        .map(|i| {
            OptionRecord::new(format!("{}-{:03}", category, i + 1))
                .with_field("name", format!("{} #{}", category, i + 1))
        })
        .collect();
    PageResponse::new(list, CATALOG_SIZE as i64)
}

#[component]
pub fn App() -> impl IntoView {
    let value = RwSignal::new(String::new());
    let related_key = RwSignal::new(Some("fruit".to_string()));
    let page_size = RwSignal::new(10usize);
    let (record, set_record) = signal::<Option<OptionRecord>>(None);

    let source = source_fn(|args: FetchPageArgs| async move {
        TimeoutFuture::new(LATENCY_MS).await;
        Ok::<_, FetchError>(catalog_page(&args))
    });

    view! {
        <div class="paging-select-demo">
            <ButtonGroup>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| related_key.set(Some("fruit".to_string()))
                >
                    "Фрукты"
                </Button>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| related_key.set(Some("vegetable".to_string()))
                >
                    "Овощи"
                </Button>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| page_size.update(|size| *size = if *size == 10 { 25 } else { 10 })
                >
                    {move || format!("Страница: {}", page_size.get())}
                </Button>
            </ButtonGroup>

            <PagingSelect
                source=source
                value=value
                page_size=page_size
                related_key=related_key
                on_related=Callback::new(move |item: Option<OptionRecord>| set_record.set(item))
                on_clear=Callback::new(move |_: ()| set_record.set(None))
                placeholder="Выберите товар"
            />

            <p>"Значение: " {move || value.get()}</p>
            <pre>
                {move || {
                    record
                        .get()
                        .and_then(|r| serde_json::to_string_pretty(&r).ok())
                        .unwrap_or_default()
                }}
            </pre>
        </div>
    }
}
