use std::{collections::BTreeSet, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    foundation::core::{DVec3, Rgb},
    foundation::error::{LunaError, LunaResult},
    narrative::phase::Phase,
};

/// Ordered, validated, immutable list of phases.
///
/// Serialized as a bare JSON array of [`Phase`] objects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Phase>", into = "Vec<Phase>")]
pub struct PhaseCatalog {
    phases: Vec<Phase>,
}

impl PhaseCatalog {
    pub fn new(phases: Vec<Phase>) -> LunaResult<Self> {
        let catalog = Self { phases };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> LunaResult<()> {
        if self.phases.is_empty() {
            return Err(LunaError::validation("phase catalog must not be empty"));
        }
        let mut seen = BTreeSet::new();
        for phase in &self.phases {
            phase.validate()?;
            if !seen.insert(phase.id.as_str()) {
                return Err(LunaError::validation(format!(
                    "duplicate phase id '{}'",
                    phase.id
                )));
            }
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> LunaResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> LunaResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            LunaError::validation(format!(
                "failed to read phase catalog '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> LunaResult<String> {
        Ok(serde_json::to_string_pretty(&self.phases)?)
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    /// Always false: an empty catalog never validates.
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Phase> {
        self.phases.get(index)
    }

    pub fn first(&self) -> &Phase {
        &self.phases[0]
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.phases.iter().position(|p| p.id == id)
    }

    /// The five-step lunar sequence, from new moon to total eclipse.
    pub fn reference() -> Self {
        Self {
            phases: reference_phases(),
        }
    }
}

impl TryFrom<Vec<Phase>> for PhaseCatalog {
    type Error = LunaError;

    fn try_from(phases: Vec<Phase>) -> LunaResult<Self> {
        Self::new(phases)
    }
}

impl From<PhaseCatalog> for Vec<Phase> {
    fn from(catalog: PhaseCatalog) -> Self {
        catalog.phases
    }
}

impl std::ops::Index<usize> for PhaseCatalog {
    type Output = Phase;

    fn index(&self, index: usize) -> &Phase {
        &self.phases[index]
    }
}

struct PhaseDef {
    id: &'static str,
    title: &'static str,
    tagline: &'static str,
    poem: [&'static str; 4],
    left: [f64; 3], // right body mirrors x and y
    background: u32,
    accent: u32,
    light: f64,
    ambient: f64,
    glow: f64,
    halo: f64,
    stars: f64,
    bloom: f64,
}

const REFERENCE: [PhaseDef; 5] = [
    PhaseDef {
        id: "lua-nova",
        title: "Lua Nova",
        tagline: "Quando o primeiro respiro encontra eco.",
        poem: [
            "No silêncio da órbita,",
            "duas marés aguardam fôlego,",
            "promessa de encontro lento,",
            "constelações guardam o segredo.",
        ],
        left: [-8.0, 1.4, -6.0],
        background: 0x050316,
        accent: 0x2d3f9d,
        light: 0.8,
        ambient: 0.28,
        glow: 0.8,
        halo: 0.38,
        stars: 0.04,
        bloom: 0.6,
    },
    PhaseDef {
        id: "crescente",
        title: "Crescente",
        tagline: "Órbitas se alinham ao compasso do pulso.",
        poem: [
            "Traços de prata despertam,",
            "marés em voz baixa sussurram,",
            "o vazio já não assusta,",
            "o horizonte aprende teu nome.",
        ],
        left: [-5.6, 1.0, -5.2],
        background: 0x060720,
        accent: 0x3d4fcb,
        light: 1.1,
        ambient: 0.38,
        glow: 0.95,
        halo: 0.46,
        stars: 0.06,
        bloom: 0.74,
    },
    PhaseDef {
        id: "quarto",
        title: "Quarto Crescente",
        tagline: "Metade luz, metade promessa.",
        poem: [
            "Metade luz, metade mistério,",
            "linha orbital escrita em verso,",
            "cada passo um cometa discreto,",
            "a noite curva para sentir.",
        ],
        left: [-3.3, 0.7, -4.4],
        background: 0x07092b,
        accent: 0x5144d8,
        light: 1.4,
        ambient: 0.48,
        glow: 1.18,
        halo: 0.6,
        stars: 0.08,
        bloom: 0.88,
    },
    PhaseDef {
        id: "gibosa",
        title: "Gibosa",
        tagline: "Quase toque, quase aurora.",
        poem: [
            "A luz goteja devagar,",
            "teus contornos orbitam a pele,",
            "vento solar penteia o vazio,",
            "prelúdio de eclipse no olhar.",
        ],
        left: [-1.6, 0.35, -3.6],
        background: 0x090b33,
        accent: 0x6b4bd1,
        light: 1.6,
        ambient: 0.58,
        glow: 1.48,
        halo: 0.74,
        stars: 0.1,
        bloom: 1.08,
    },
    PhaseDef {
        id: "eclipse",
        title: "Eclipse Total",
        tagline: "Dois brilhos na mesma órbita.",
        poem: [
            "O encontro risca o infinito,",
            "um só halo respira no escuro,",
            "partículas dançam teu nome,",
            "amor é sombra que ilumina.",
        ],
        left: [-0.4, 0.18, -3.1],
        background: 0x0a0b3b,
        accent: 0x9b7bff,
        light: 1.9,
        ambient: 0.7,
        glow: 1.9,
        halo: 0.9,
        stars: 0.12,
        bloom: 1.32,
    },
];

fn rgb24(v: u32) -> Rgb {
    Rgb::from_rgb8((v >> 16) as u8, (v >> 8) as u8, v as u8)
}

fn reference_phases() -> Vec<Phase> {
    REFERENCE
        .iter()
        .map(|d| {
            let [x, y, z] = d.left;
            Phase {
                id: d.id.to_owned(),
                title: d.title.to_owned(),
                tagline: d.tagline.to_owned(),
                poem: d.poem.join("\n"),
                left_offset: DVec3::new(x, y, z),
                right_offset: DVec3::new(-x, -y, z),
                background: rgb24(d.background),
                accent: rgb24(d.accent),
                light_intensity: d.light,
                ambient_intensity: d.ambient,
                glow_intensity: d.glow,
                halo_opacity: d.halo,
                star_drift_speed: d.stars,
                bloom_intensity: d.bloom,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/narrative/catalog.rs"]
mod tests;
