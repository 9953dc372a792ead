use yew::prelude::*;

use crate::components::icons::{icon_book, icon_trophy};
use crate::components::page_shell;

struct Course {
    title: &'static str,
    duration: &'static str,
    category: &'static str,
}

const COURSES: [Course; 4] = [
    Course { title: "Interés Compuesto 101", duration: "45 min", category: "Inversión" },
    Course { title: "Impuestos para Freelancers", duration: "1.5h", category: "Fiscalidad" },
    Course { title: "Psicología del Gasto", duration: "30 min", category: "Conducta" },
    Course { title: "Bitcoin y Cripto", duration: "2h", category: "Emergente" },
];

const ACHIEVEMENTS: [(&str, &str, bool); 2] = [
    ("Ahorrador Novato", "Nivel 1", true),
    ("Inversor Maestro", "Bloqueado", false),
];

#[function_component(EducationPage)]
pub fn education_page() -> Html {
    page_shell(
        "Educación Financiera",
        "Domina el arte del Dinero Inteligente.",
        html! {},
        html! {
            <div class="grid grid-cols-1 lg:grid-cols-4 gap-10">
                <div class="lg:col-span-3 flex flex-col gap-6">
                    <h2 class="text-2xl font-bold">{"Cursos para Ti"}</h2>
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-6">
                        { for COURSES.iter().map(|course| html! {
                            <div key={course.title} class="bg-card-light dark:bg-card-dark rounded-2xl border border-border-light dark:border-border-dark p-6 flex flex-col gap-4 shadow-sm">
                                <span class="w-fit px-3 py-1 rounded-lg text-[10px] font-black uppercase tracking-widest bg-primary/10 text-primary">{ course.category }</span>
                                <h3 class="font-bold text-lg flex items-center gap-2">{ icon_book() }{ course.title }</h3>
                                <div class="flex items-center gap-4 text-xs font-bold opacity-60">
                                    <span>{ course.duration }</span>
                                    <span>{"Básico"}</span>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
                <aside class="bg-card-light dark:bg-card-dark rounded-2xl border border-border-light dark:border-border-dark p-6 shadow-sm h-fit">
                    <h3 class="font-bold mb-6 flex items-center justify-between">{"Tus Logros"}{ icon_trophy() }</h3>
                    <div class="flex flex-col gap-6">
                        { for ACHIEVEMENTS.iter().map(|(name, level, unlocked)| html! {
                            <div key={*name} class={classes!("flex", "flex-col", (!unlocked).then_some("opacity-40"))}>
                                <span class="font-bold text-sm">{ *name }</span>
                                <span class="text-[10px] opacity-60">{ *level }</span>
                            </div>
                        }) }
                    </div>
                </aside>
            </div>
        },
    )
}
