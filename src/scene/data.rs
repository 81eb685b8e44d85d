// data.rs - Label and explanation tables
//
// Anchors are in scene units after model normalization (models are fitted
// to a 6-unit box around the origin).

/// Hotspot definition: (id, display text, anchor, initially hidden)
pub type LabelDef = (&'static str, &'static str, [f32; 3], bool);

/// Explanation definition: (label id, title, body)
pub type ExplanationDef = (&'static str, &'static str, &'static str);

/// Labels that only appear while the volcano erupts
pub const ERUPTION_LABELS: [&str; 2] = ["ash", "lava_flow"];

pub const LABELS: [LabelDef; 13] = [
    // Center/bottom
    ("magma", "Magmakammer", [0.0, -1.2, 0.0], false),

    // Main shaft, bottom to top
    ("vent", "Hauptschlot", [0.0, -0.2, 0.0], false),
    ("throat", "Vulkanschlund", [0.0, 1.4, 0.0], false),
    ("vent_opening", "Austrittsöffnung", [0.0, 1.8, 0.5], false),
    ("crater", "Krater", [0.0, 2.3, 0.0], false),

    // Eruption
    ("ash", "Aschewolke", [0.0, 4.0, 0.0], true),
    ("lava_flow", "Lavastrom", [2.0, 1.0, 0.5], true),

    // Side features
    ("side_vent", "Seitenschlot", [0.8, 0.0, 0.0], false),
    ("side_eruption", "Seitenöffnung", [1.6, 0.2, 0.0], false),
    ("parasitic_cone", "Nebenkrater", [2.0, 0.5, 0.0], false),
    ("sill", "Lagergang", [-1.8, -1.0, 0.0], false),

    // Layers
    ("layer", "Lava- und Ascheschichten", [-1.8, 0.5, 0.0], false),
    ("crust", "Erdkruste", [2.5, -1.2, 0.0], false),
];

pub const EXPLANATIONS: [ExplanationDef; 13] = [
    (
        "magma",
        "Magmakammer / Magmareservoir",
        "Willkommen in der Küche des Vulkans! Ganz tief unten sammelt sich das flüssige Gestein – das Magma – und wartet darauf, dass der Druck groß genug für den Ausbruch wird.",
    ),
    (
        "vent",
        "Förderschlot / Hauptschlot",
        "Das ist die Hauptstraße des Vulkans! Wie ein riesiger Strohhalm führt dieser Gang von ganz tief unten bis nach ganz oben.",
    ),
    (
        "crust",
        "Gesteinsschichten der Erdkruste",
        "Das ist der feste Boden unter unseren Füßen. Er besteht aus vielen verschiedenen Lagen Stein, die schon seit Millionen von Jahren dort liegen.",
    ),
    (
        "crater",
        "Krater",
        "Stell dir den Krater wie eine riesige Schüssel ganz oben auf dem Gipfel vor. In dieser Schüssel sammelt sich die glühende Lava, bevor sie den Berg hinunterläuft.",
    ),
    (
        "ash",
        "Aschewolke",
        "Hust, hust! Wenn der Vulkan so richtig Schwung hat, pustet er eine riesige Wolke aus Staub und feiner Asche kilometerhoch in den Himmel. Das sieht aus wie dunkler Rauch!",
    ),
    (
        "throat",
        "Vulkanschlund",
        "Das ist der oberste Teil des Halses vom Vulkan. Er sitzt direkt unter dem Krater und ist wie der Rachen eines Drachen!",
    ),
    (
        "side_vent",
        "Seitenschlot",
        "Das ist ein kleinerer Abzweig vom Hauptweg – fast so wie eine Seitenstraße bei einer Autobahn.",
    ),
    (
        "layer",
        "Lava- und Ascheschichten",
        "Ein Vulkan wächst wie ein Turm aus bunten Steinen. Jedes Mal, wenn er ausbricht, kommt eine neue Schicht aus abgekühlter Lava und Asche obendrauf.",
    ),
    (
        "lava_flow",
        "Lavastrom",
        "Vorsicht, heiß! Sobald das flüssige Gestein aus dem Vulkan fließt, nennen wir es Lava. Sie kriecht wie ein glühender, langsamer Fluss den Hang hinunter.",
    ),
    (
        "side_eruption",
        "Seitenöffnung / seitlicher Ausbruch",
        "Manchmal ist der Hauptweg nach oben verstopft. Dann sucht sich die Lava einfach einen kleinen Umweg durch die Seite des Berges.",
    ),
    (
        "parasitic_cone",
        "Nebenkrater / Parasitärkrater",
        "Das ist wie ein kleiner Bruder des großen Vulkans. Er wächst an der Seite des Hauptberges und spuckt dort sein eigenes Feuer.",
    ),
    (
        "sill",
        "Lagergang",
        "Hier hat sich das flüssige Gestein einfach flach zwischen zwei andere Erdschichten gequetscht und ist dort hart geworden, wie eine Füllung in einem Keks.",
    ),
    (
        "vent_opening",
        "Austrittsöffnung / Schlotöffnung",
        "Das ist das 'Tor' nach draußen. Hier oben kommt alles ans Tageslicht, was tief unten im Bauch des Vulkans brodelt.",
    ),
];

// Narration (title, body)
pub const ERUPTION_NARRATION: (&str, &str) = (
    "Vulkanausbruch!",
    "Achtung! Der Vulkan bricht aus! Asche und Rauch steigen auf.",
);
pub const RESET_NARRATION: (&str, &str) = ("Reset", "Der Vulkan schläft wieder.");
