//! Legal details of the platform operator at `/company`.

use leptos::prelude::*;

const OPERATOR: [(&str, &str); 3] = [
    ("Наименование", "ИП Кельман Ксения Андреевна"),
    ("ИНН", "271307627509"),
    ("ОГРНИП", "323270000053207"),
];

const ADDRESS: &str = "Хабаровский край, район имени Лазо, п. Хор, ул. Менделеева, д. 10-42";

const BANK: [(&str, &str); 4] = [
    ("Банк", "АО Тинькофф Банк"),
    ("БИК", "044525974"),
    ("Корр. счёт", "30101810145250000974"),
    ("Расчётный счёт", "40802810800005400060"),
];

const ACTIVITY: [(&str, &str); 2] = [
    ("Вид деятельности", "Деятельность по предоставлению прочих вспомогательных услуг для бизнеса"),
    ("ОКВЭД", "82.99 - Деятельность по предоставлению прочих вспомогательных услуг для бизнеса"),
];

fn details(rows: &'static [(&'static str, &'static str)]) -> impl IntoView {
    rows.iter()
        .map(|(label, value)| {
            view! {
                <div class="details__row">
                    <div class="muted">{*label}</div>
                    <div class="details__value">{*value}</div>
                </div>
            }
        })
        .collect_view()
}

#[component]
pub fn CompanyPage() -> impl IntoView {
    view! {
        <div class="company-page">
            <header class="company-page__header">
                <h1>"120 минут"</h1>
                <p class="muted">"Платформа для поиска почасовой аренды"</p>
            </header>
            <section class="card">
                <h2>"Информация о компании"</h2>
                <div class="details">{details(&OPERATOR)}</div>
            </section>
            <section class="card">
                <h2>"Адрес регистрации"</h2>
                <p class="details__value">{ADDRESS}</p>
            </section>
            <section class="card">
                <h2>"Банковские реквизиты"</h2>
                <div class="details">{details(&BANK)}</div>
            </section>
            <section class="card">
                <h2>"Правовая информация"</h2>
                <div class="details">{details(&ACTIVITY)}</div>
            </section>
            <section class="card card--accent">
                <h2>"О платформе"</h2>
                <p>"120 минут — агрегатор предложений почасовой аренды номеров и апартаментов."</p>
                <p>
                    "Мы не являемся владельцами объектов размещения. Платформа работает как маркетплейс, "
                    "соединяющий владельцев гостиниц с потенциальными клиентами."
                </p>
                <p>
                    "Все договоры заключаются напрямую между клиентом и собственником объекта. "
                    "Платформа взимает комиссию с владельцев за размещение и продвижение их предложений."
                </p>
            </section>
        </div>
    }
}
