//! Driver guides
//!
//! Static educational content: dashboard warning lights, short maintenance
//! guides, the pre-trip checklist and a few driving video lessons.

use serde::Serialize;

/// How serious a dashboard light is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LightSeverity {
    /// Orange: get it checked soon
    Orange,
    /// Red: stop the vehicle
    Red,
}

/// A dashboard warning light and what it means
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardLight {
    /// Stable id
    pub id: &'static str,
    /// Light name
    pub name: &'static str,
    /// Severity color
    pub severity: LightSeverity,
    /// What the light indicates
    pub description: &'static str,
}

/// A short guide with markdown content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Guide {
    /// Stable slug
    pub id: &'static str,
    /// Title
    pub title: &'static str,
    /// One-line summary
    pub description: &'static str,
    /// Markdown body
    pub content: &'static str,
}

/// An embedded video lesson
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoLesson {
    /// Stable id
    pub id: &'static str,
    /// Title
    pub title: &'static str,
    /// Embed URL
    pub url: &'static str,
}

/// Dashboard warning lights
pub const DASHBOARD_LIGHTS: &[DashboardLight] = &[
    DashboardLight {
        id: "1",
        name: "Injeção Eletrônica",
        severity: LightSeverity::Orange,
        description: "Problema no sistema de emissões ou combustão.",
    },
    DashboardLight {
        id: "2",
        name: "Pressão do Óleo",
        severity: LightSeverity::Red,
        description: "Baixa pressão ou nível de óleo. Pare o carro imediatamente!",
    },
    DashboardLight {
        id: "3",
        name: "Bateria/Alternador",
        severity: LightSeverity::Red,
        description: "Problema no sistema elétrico ou carga da bateria.",
    },
    DashboardLight {
        id: "4",
        name: "Temperatura",
        severity: LightSeverity::Red,
        description: "Motor superaquecido. Risco de danos graves.",
    },
    DashboardLight {
        id: "5",
        name: "ABS",
        severity: LightSeverity::Orange,
        description: "Problema no sistema de freios antitravamento.",
    },
    DashboardLight {
        id: "6",
        name: "Airbag",
        severity: LightSeverity::Orange,
        description: "Falha no sistema de segurança suplementar.",
    },
];

/// Maintenance and safety guides
pub const GUIDES: &[Guide] = &[
    Guide {
        id: "manutencao-pratica",
        title: "Guia Prático de Manutenção",
        description: "Aprenda o básico para manter seu veículo sempre em dia.",
        content: "### Itens de verificação quinzenal:\n\
- Nível do óleo do motor.\n\
- Calibragem dos pneus (incluindo o estepe).\n\
- Nível do fluido de arrefecimento (com motor frio).\n\
- Nível do fluido de freio.\n\
- Funcionamento de todas as lâmpadas.\n",
    },
    Guide {
        id: "problemas-comuns",
        title: "Problemas Comuns",
        description: "Identifique ruídos e comportamentos estranhos.",
        content: "### Ruídos Estranhos:\n\
- **Assobio ao frear:** Pastilhas de freio gastas.\n\
- **Estalos ao esterçar:** Problemas na homocinética.\n\
- **Batidas secas em buracos:** Suspensão ou amortecedores.\n\
- **Motor morrendo em marcha lenta:** Possível sujeira no TBI ou bicos.\n",
    },
    Guide {
        id: "oficina-segura",
        title: "Não seja enganado na oficina",
        description: "Dicas para não pagar por serviços desnecessários.",
        content: "### Dicas de Ouro:\n\
1. Peça sempre o orçamento por escrito.\n\
2. Solicite as peças velhas de volta.\n\
3. Desconfie de \"limpezas milagrosas\" de bicos ou motor (descarbonização) sem diagnóstico prévio.\n\
4. Verifique o manual do proprietário antes de aceitar trocas de fluidos.\n",
    },
    Guide {
        id: "emergencia",
        title: "Emergência Automotiva",
        description: "O que fazer em casos de pane ou acidente.",
        content: "### Procedimentos:\n\
- Sinalize o local com o triângulo (pelo menos 30 metros de distância).\n\
- Ligue o pisca-alerta.\n\
- Saia do veículo e fique em local seguro (fora da pista).\n\
- Tenha em mãos o número da sua seguradora ou guincho de confiança.\n",
    },
];

/// Pre-trip checklist
pub const CHECKLIST_ITEMS: &[&str] = &[
    "Nível de óleo verificado",
    "Pneus calibrados (incluindo estepe)",
    "Luzes (Faróis, Setas, Freio) funcionando",
    "Limpadores de para-brisa (palhetas) em bom estado",
    "Líquido de arrefecimento no nível",
    "Fluido de freio no nível e cor correta",
    "Estado das correias (sem rachaduras)",
    "Pastilhas de freio (espessura)",
    "Vazamentos visíveis sob o veículo",
    "Extintor no prazo de validade",
    "Bateria (terminais limpos e sem zinabre)",
    "Nível de fluido da direção hidráulica",
    "Estado da suspensão (sem barulhos metálicos)",
    "Funcionamento do ar-condicionado",
    "Integridade dos cintos de segurança",
    "Triângulo, macaco e chave de roda no lugar",
    "Documentação (CRLV) em dia",
];

/// Driving video lessons
pub const VIDEO_LESSONS: &[VideoLesson] = &[
    VideoLesson {
        id: "1",
        title: "Dicas para dirigir bem na cidade",
        url: "https://www.youtube.com/embed/oH48FnyYNZ0",
    },
    VideoLesson {
        id: "2",
        title: "Aprenda a sair com o carro rapidamente!",
        url: "https://www.youtube.com/embed/fhVDFfDrC0g",
    },
    VideoLesson {
        id: "3",
        title: "Aprenda a passar e reduzir marcha corretamente!",
        url: "https://www.youtube.com/embed/zM0vauwPIbg",
    },
    VideoLesson {
        id: "4",
        title: "Baliza perfeita em apenas 3 minutos!",
        url: "https://www.youtube.com/embed/e5GklE4hJx8",
    },
];

/// Look up a guide by its slug
pub fn guide_by_id(id: &str) -> Option<&'static Guide> {
    GUIDES.iter().find(|g| g.id == id)
}

/// Warning lights of one severity
pub fn lights_by_severity(
    severity: LightSeverity,
) -> impl Iterator<Item = &'static DashboardLight> {
    DASHBOARD_LIGHTS.iter().filter(move |l| l.severity == severity)
}
