use yew::prelude::*;

use crate::components::page_shell;

const TRENDING: [(&str, &str); 2] = [
    ("#InversionPasiva", "1.2k personas hablando"),
    ("#Reto30Dias", "800 personas participando"),
];

#[function_component(CommunityPage)]
pub fn community_page() -> Html {
    page_shell(
        "Juntos por la Libertad Financiera",
        "Aprende de las estrategias de otros usuarios y celebra tus logros.",
        html! {},
        html! {
            <div class="grid grid-cols-1 lg:grid-cols-12 gap-10">
                <div class="lg:col-span-8 bg-card-light dark:bg-card-dark rounded-2xl p-6 border border-border-light dark:border-border-dark shadow-sm flex flex-col gap-4">
                    <textarea class="w-full bg-background-light dark:bg-background-dark rounded-2xl p-4 text-sm outline-none min-h-[100px] resize-none"
                        placeholder="¡Comparte un hito hoy! Ej: 'Logré ahorrar mi primer 10%...'"></textarea>
                    <button class="self-end bg-primary text-[#102216] font-bold py-2 px-8 rounded-xl text-sm" disabled=true>{"Publicar"}</button>
                </div>
                <aside class="lg:col-span-4 flex flex-col gap-6">
                    <div class="bg-card-light dark:bg-card-dark rounded-2xl p-6 border border-border-light dark:border-border-dark">
                        <h3 class="font-bold mb-4">{"Tendencias"}</h3>
                        { for TRENDING.iter().map(|(tag, people)| html! {
                            <div key={*tag} class="flex flex-col mb-3">
                                <span class="font-bold text-primary">{ *tag }</span>
                                <span class="text-xs opacity-60">{ *people }</span>
                            </div>
                        }) }
                    </div>
                    <div class="bg-primary/10 rounded-2xl p-6 border border-primary/20">
                        <h3 class="font-bold mb-2">{"Desafío del Mes"}</h3>
                        <p class="text-sm opacity-80">{"Ahorra un 10% extra y consigue el emblema de \"Eficiencia Máxima\"."}</p>
                        <p class="text-xs font-bold mt-3 opacity-60">{"450 Usuarios lo han logrado"}</p>
                    </div>
                </aside>
            </div>
        },
    )
}
