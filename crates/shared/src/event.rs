//! Events listed on each tenant's site

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Calendar date, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    /// Local start time, `HH:MM`
    pub time: String,
    pub location: String,
}

/// Read-only catalog of events keyed by church id
#[derive(Debug, Clone, Default)]
pub struct EventCatalog {
    events: HashMap<String, Vec<Event>>,
}

impl EventCatalog {
    pub fn new(events: HashMap<String, Vec<Event>>) -> Self {
        Self { events }
    }

    /// Events registered under a church id, in listing order.
    /// Unknown church ids have no events.
    pub fn for_church(&self, church_id: &str) -> &[Event] {
        self.events.get(church_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The events shipped with the site
    pub fn builtin() -> Self {
        let mut events = HashMap::new();

        events.insert(
            "ch_01".to_string(),
            vec![
                event(
                    "evt_01_01",
                    "Culto de Celebração",
                    "Venha celebrar conosco em um momento especial de louvor e adoração.",
                    (2025, 12, 1),
                    "19:00",
                    "Templo Central - Igreja A",
                ),
                event(
                    "evt_01_02",
                    "Encontro de Jovens",
                    "Momento exclusivo para jovens com dinâmicas e estudos bíblicos.",
                    (2025, 12, 5),
                    "20:00",
                    "Salão de Eventos - Igreja A",
                ),
                event(
                    "evt_01_03",
                    "Escola Bíblica Dominical",
                    "Estudo aprofundado da Palavra todos os domingos pela manhã.",
                    (2025, 12, 8),
                    "09:00",
                    "Templo Central - Igreja A",
                ),
            ],
        );

        events.insert(
            "ch_02".to_string(),
            vec![
                event(
                    "evt_02_01",
                    "Vigília da Transformação",
                    "Uma noite de oração e busca pela presença de Deus.",
                    (2025, 11, 30),
                    "22:00",
                    "Santuário - Igreja B",
                ),
                event(
                    "evt_02_02",
                    "Café com Propósito",
                    "Encontro matinal para networking e conexões espirituais.",
                    (2025, 12, 3),
                    "07:00",
                    "Cafeteria da Igreja B",
                ),
                event(
                    "evt_02_03",
                    "Conferência Família Abençoada",
                    "Três dias de ministração focada em restauração familiar.",
                    (2025, 12, 10),
                    "19:30",
                    "Auditório Principal - Igreja B",
                ),
            ],
        );

        events.insert(
            "ch_99".to_string(),
            vec![
                event(
                    "evt_99_01",
                    "Experiência Vida",
                    "Culto contemporâneo com louvor ao vivo e mensagem inspiradora.",
                    (2025, 12, 2),
                    "18:00",
                    "Arena Vida",
                ),
                event(
                    "evt_99_02",
                    "Vida Kids - Aventura Bíblica",
                    "Programa especial para crianças com atividades lúdicas e ensinamentos.",
                    (2025, 12, 7),
                    "15:00",
                    "Espaço Vida Kids",
                ),
                event(
                    "evt_99_03",
                    "Retiro Vida Plena",
                    "Final de semana de imersão espiritual em local paradisíaco.",
                    (2025, 12, 14),
                    "08:00",
                    "Chácara Recanto da Paz",
                ),
            ],
        );

        Self { events }
    }
}

fn event(
    id: &str,
    title: &str,
    description: &str,
    (year, month, day): (i32, u32, u32),
    time: &str,
    location: &str,
) -> Event {
    Event {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        time: time.to_string(),
        location: location.to_string(),
    }
}
