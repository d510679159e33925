//! Depth-dependent instruction fragments.

use verbum_core::request::Depth;

/// The five fragments a depth contributes to a passage prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthFragments {
    /// Voice and register of the whole study.
    pub tone: &'static str,
    /// How many lexical entries, and how deep the morphology goes.
    pub lexical: &'static str,
    /// Which interpretive traditions to present.
    pub theology: &'static str,
    /// Shape of the sermon outline.
    pub sermon: &'static str,
    /// Overall priority and intended audience.
    pub directive: &'static str,
}

const QUICK: DepthFragments = DepthFragments {
    tone: "Tom devocional, inspirador, prático e conciso. Linguagem simples e direta.",
    lexical: "Selecione 3 palavras-chave essenciais. Inclua morfologia básica.",
    theology: "Apresente 3 visões principais (Consenso Histórico, Evangélico, Aplicação Prática).",
    sermon: "Gere um esboço devocional curto de 3 pontos.",
    directive: "Priorize a brevidade. O objetivo é leitura rápida e edificação.",
};

const DETAILED: DepthFragments = DepthFragments {
    tone: "Tom educacional, didático e equilibrado. Linguagem acessível mas robusta.",
    lexical: "Selecione 5 palavras importantes com morfologia detalhada.",
    theology: "Apresente 5 a 6 linhas interpretativas variadas e relevantes para o texto. Não se limite às clássicas; considere tradições como: Judaica, Patrística, Ortodoxa, Reformada, Wesleyana, Pentecostal, Liberal ou Contextual, conforme a pertinência.",
    sermon: "Gere um esboço de sermão expositivo equilibrado.",
    directive: "Equilíbrio entre profundidade e clareza. Ideal para professores de Escola Bíblica.",
};

const ACADEMIC: DepthFragments = DepthFragments {
    tone: "Tom estritamente acadêmico, crítico e exegético. Linguagem formal, técnica.",
    lexical: "OBRIGATÓRIO: Analise 5-7 palavras-chave. Forneça a MORFOLOGIA COMPLETA e use léxicos acadêmicos (BDAG/HALOT).",
    theology: "Análise exaustiva e plural. OBRIGATÓRIO incluir, quando relevante: Exegese Judaica/Antiga, Patrística (Grega/Latina), Reforma, Crítica-Histórica Moderna e Perspectivas Contemporâneas.",
    sermon: "Gere um esboço de sermão EXPOSITIVO denso, com forte base exegética.",
    directive: "Priorize a profundidade técnica, crítica textual e precisão histórica.",
};

const SERMON: DepthFragments = DepthFragments {
    tone: "Tom pastoral, proclamativo, persuasivo e eloquente. Focado na oratória.",
    lexical: "Selecione palavras que enriqueçam a pregação e sejam explicáveis no púlpito.",
    theology: "Apresente visões que ajudem na aplicação (ex: Puritana, Avivalista). Cite grandes pregadores indicando a ERA.",
    sermon: "PRIORIDADE MÁXIMA: Gere um SERMÃO EXPOSITIVO COMPLETO. OBRIGATÓRIO: cada ponto de explicação e aplicação DEVE incluir referências bíblicas explícitas entre parênteses para fundamentar o texto. Ex: (Jo 3:16).",
    directive: "O foco total é gerar um sermão bíblico completo. A exegese deve servir à homilética.",
};

impl DepthFragments {
    pub fn for_depth(depth: Depth) -> &'static DepthFragments {
        match depth {
            Depth::Quick => &QUICK,
            Depth::Detailed => &DETAILED,
            Depth::Academic => &ACADEMIC,
            Depth::Sermon => &SERMON,
        }
    }

    pub fn all(&self) -> [&'static str; 5] {
        [
            self.tone,
            self.lexical,
            self.theology,
            self.sermon,
            self.directive,
        ]
    }
}
