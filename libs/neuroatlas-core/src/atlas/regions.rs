//! Built-in mouse brain regions (Allen Mouse Brain Atlas acronyms).

use super::{Region, RegionGroup};

struct Entry {
    id: &'static str,
    allen_id: u32,
    name: &'static str,
    group: RegionGroup,
    bilateral: bool,
    connections: [&'static str; 4],
    description: &'static str,
    surgical_notes: &'static str,
}

impl From<&Entry> for Region {
    fn from(entry: &Entry) -> Self {
        Region {
            id: entry.id.to_string(),
            allen_id: entry.allen_id,
            name: entry.name.to_string(),
            acronym: entry.id.to_string(),
            description: entry.description.to_string(),
            surgical_notes: entry.surgical_notes.to_string(),
            connections: entry.connections.iter().map(|c| c.to_string()).collect(),
            group: entry.group,
            bilateral: entry.bilateral,
        }
    }
}

pub(super) fn mouse_regions() -> Vec<Region> {
    ENTRIES.iter().map(Region::from).collect()
}

const ENTRIES: &[Entry] = &[
    // Cortex
    Entry {
        id: "MOp",
        allen_id: 985,
        name: "Primary Motor Cortex",
        group: RegionGroup::Cortex,
        bilateral: true,
        connections: ["MOs", "SSp", "CP", "TH"],
        description: "Primary motor area responsible for executing voluntary movements. Contains a somatotopic map where medial regions control hindlimb and lateral regions control forelimb and orofacial movements.",
        surgical_notes: "Center at AP +1.5, ML 1.5 from bregma. Thin skull here; use care with drill. Layer V pyramidal neurons project to spinal cord via corticospinal tract.",
    },
    Entry {
        id: "MOs",
        allen_id: 993,
        name: "Secondary Motor Cortex",
        group: RegionGroup::Cortex,
        bilateral: true,
        connections: ["MOp", "ACA", "PPC", "CP"],
        description: "Supplementary motor region involved in motor planning and action selection. Integrates sensory information to guide upcoming movements and is critical for learned motor sequences.",
        surgical_notes: "Center at AP +2.5, ML 1.0 from bregma. Sits rostral and slightly medial to MOp. Overlies anterior portions of cingulate cortex at depth.",
    },
    Entry {
        id: "SSp",
        allen_id: 322,
        name: "Primary Somatosensory Cortex",
        group: RegionGroup::Cortex,
        bilateral: true,
        connections: ["MOp", "VIS", "TH", "CP"],
        description: "Receives tactile, proprioceptive, and nociceptive input from the body via ventral posteromedial and ventral posterolateral thalamic nuclei. Contains the barrel cortex subfield for whisker representation.",
        surgical_notes: "Center at AP -0.5, ML 2.5 from bregma. Barrel field (SSp-bfd) sits at AP -1.0, ML 3.0. Large craniotomy needed for full exposure; avoid middle meningeal artery laterally.",
    },
    Entry {
        id: "VIS",
        allen_id: 669,
        name: "Visual Cortex",
        group: RegionGroup::Cortex,
        bilateral: true,
        connections: ["SSp", "RSC", "PPC", "TH"],
        description: "Primary and higher visual areas processing retinotopic visual information. V1 (VISp) receives direct input from dorsal lateral geniculate nucleus; surrounding areas (VISl, VISal, VISpm) process higher-order features.",
        surgical_notes: "Center at AP -3.5, ML 2.5 from bregma. Located over posterior cortex near lambda. Transverse sinus runs nearby at the posterior margin; avoid puncture during craniotomy.",
    },
    Entry {
        id: "AUD",
        allen_id: 247,
        name: "Auditory Cortex",
        group: RegionGroup::Cortex,
        bilateral: true,
        connections: ["SSp", "VIS", "TH", "ACA"],
        description: "Tonotopically organized cortex receiving input from medial geniculate nucleus of thalamus. Encodes sound frequency, intensity, and temporal patterns critical for auditory perception.",
        surgical_notes: "Center at AP -2.5, ML 4.0 from bregma. Located on lateral surface; requires angled approach or temporal craniotomy. Watch for middle cerebral artery branches.",
    },
    Entry {
        id: "ACA",
        allen_id: 31,
        name: "Anterior Cingulate Cortex",
        group: RegionGroup::Cortex,
        bilateral: false,
        connections: ["PL", "ILA", "MOs", "RSC"],
        description: "Medial prefrontal region involved in error monitoring, conflict detection, and cost-benefit decision-making. Heavily interconnected with limbic and prefrontal networks.",
        surgical_notes: "Center at AP +1.0, ML 0.3 from bregma, depth 1.0 mm. Sits along the midline; approach with a slight angle to avoid superior sagittal sinus. Often targeted with viral injections at 10-15 degree angle.",
    },
    Entry {
        id: "PL",
        allen_id: 972,
        name: "Prelimbic Cortex",
        group: RegionGroup::Cortex,
        bilateral: false,
        connections: ["ILA", "ACA", "HIP", "BLA"],
        description: "Medial prefrontal region considered a functional homolog of primate dorsolateral PFC. Critical for working memory, goal-directed behavior, and fear expression.",
        surgical_notes: "Center at AP +1.8, ML 0.3 from bregma, depth 1.5 mm. Approach at 10-degree angle from midline to avoid sinus. Often co-targeted with ILA using angled pipette.",
    },
    Entry {
        id: "ILA",
        allen_id: 44,
        name: "Infralimbic Cortex",
        group: RegionGroup::Cortex,
        bilateral: false,
        connections: ["PL", "ACA", "BLA", "HY"],
        description: "Ventral medial prefrontal region essential for fear extinction and autonomic regulation. Projects heavily to amygdala, hypothalamus, and brainstem autonomic centers.",
        surgical_notes: "Center at AP +1.7, ML 0.3 from bregma, depth 2.5 mm. Sits ventral to PL; same angled approach but deeper injection. Verify depth with electrophysiology to distinguish from PL.",
    },
    Entry {
        id: "PPC",
        allen_id: 22,
        name: "Posterior Parietal Cortex",
        group: RegionGroup::Cortex,
        bilateral: true,
        connections: ["VIS", "MOs", "RSC", "HIP"],
        description: "Association cortex integrating multisensory information for spatial navigation and sensorimotor transformations. Encodes heading direction and planned movements in allocentric coordinates.",
        surgical_notes: "Center at AP -2.0, ML 1.7 from bregma. Bordered by SSp laterally and VIS posteriorly. Relatively accessible for chronic window implants and widefield imaging.",
    },
    Entry {
        id: "RSC",
        allen_id: 254,
        name: "Retrosplenial Cortex",
        group: RegionGroup::Cortex,
        bilateral: false,
        connections: ["HIP", "VIS", "PPC", "ACA"],
        description: "Mediodorsal cortex critical for spatial memory and navigation, bridging hippocampal and neocortical representations. Contains head-direction cells and encodes contextual associations.",
        surgical_notes: "Center at AP -2.5, ML 0.4 from bregma. Runs along the midline posterior to cingulate. Thin cortex overlying cingulum bundle; control injection depth carefully to avoid white matter.",
    },
    // Hippocampal formation
    Entry {
        id: "HIP",
        allen_id: 1080,
        name: "Hippocampal Formation",
        group: RegionGroup::Hippocampus,
        bilateral: true,
        connections: ["CA1", "CA3", "DG", "RSC"],
        description: "Archicortical structure essential for episodic memory formation, spatial navigation, and contextual encoding. Contains place cells that form cognitive maps of the environment.",
        surgical_notes: "Dorsal hippocampus center at AP -2.0, ML 1.5, DV -1.5 from bregma. Extends from approximately AP -0.9 to AP -3.5. For complete lesions, multiple injection sites along the AP axis are needed.",
    },
    Entry {
        id: "CA1",
        allen_id: 382,
        name: "Hippocampal Field CA1",
        group: RegionGroup::Hippocampus,
        bilateral: true,
        connections: ["CA3", "DG", "HIP", "PL"],
        description: "Principal output layer of the hippocampus proper. CA1 pyramidal neurons receive input from CA3 via Schaffer collaterals and from entorhinal cortex layer III. Critical for temporal association memory.",
        surgical_notes: "Dorsal CA1 at AP -2.0, ML 1.5, DV -1.25 from bregma. Pyramidal layer is a thin band (~0.1 mm); use electrophysiology to identify sharp-wave ripples for precise targeting.",
    },
    Entry {
        id: "CA3",
        allen_id: 463,
        name: "Hippocampal Field CA3",
        group: RegionGroup::Hippocampus,
        bilateral: true,
        connections: ["CA1", "DG", "HIP", "TH"],
        description: "Recurrent network in the hippocampus thought to serve as an autoassociative memory for pattern completion. Receives mossy fiber input from dentate gyrus granule cells.",
        surgical_notes: "Dorsal CA3 at AP -2.0, ML 2.2, DV -2.0 from bregma. More lateral and deeper than CA1. Large mossy fiber boutons make this region identifiable histologically.",
    },
    Entry {
        id: "DG",
        allen_id: 726,
        name: "Dentate Gyrus",
        group: RegionGroup::Hippocampus,
        bilateral: true,
        connections: ["CA3", "CA1", "HIP", "ACB"],
        description: "Gateway to the hippocampal trisynaptic circuit. Granule cells receive entorhinal input via the perforant path and project to CA3 via mossy fibers. One of two adult neurogenesis sites in the mammalian brain.",
        surgical_notes: "Dorsal DG at AP -2.0, ML 1.2, DV -1.8 from bregma. The granule cell layer forms a V-shape; target the crest for maximal coverage. Adult-born neurons in the subgranular zone are sensitive to surgical trauma.",
    },
    // Subcortical nuclei
    Entry {
        id: "CP",
        allen_id: 672,
        name: "Caudoputamen (Striatum)",
        group: RegionGroup::Subcortical,
        bilateral: true,
        connections: ["MOp", "MOs", "SSp", "GPe"],
        description: "Largest nucleus of the basal ganglia, integrating cortical, thalamic, and dopaminergic inputs. Contains GABAergic medium spiny neurons organized into direct (D1) and indirect (D2) pathways controlling action selection.",
        surgical_notes: "Center at AP +0.5, ML 2.0, DV -3.0 from bregma. Very large nucleus; accessible from dorsal approach. Internal capsule fibers run through it — fiber photometry fibers should avoid these bundles.",
    },
    Entry {
        id: "ACB",
        allen_id: 56,
        name: "Nucleus Accumbens",
        group: RegionGroup::Subcortical,
        bilateral: true,
        connections: ["VTA", "PL", "BLA", "CP"],
        description: "Ventral striatal structure central to reward processing, motivation, and reinforcement learning. Core and shell subdivisions have distinct connectivity and roles in incentive salience attribution.",
        surgical_notes: "Center at AP +1.2, ML 1.0, DV -4.5 from bregma. Deep target; use angled approach to avoid lateral ventricle. Core vs shell targeting requires precise ML/DV coordinates — shell is more medial and ventral.",
    },
    Entry {
        id: "BLA",
        allen_id: 295,
        name: "Basolateral Amygdala",
        group: RegionGroup::Subcortical,
        bilateral: true,
        connections: ["CEA", "PL", "ACB", "HIP"],
        description: "Principal input nucleus of the amygdala complex. Encodes emotional valence of stimuli and associates sensory cues with rewarding or aversive outcomes. Projects to prefrontal cortex, striatum, and central amygdala.",
        surgical_notes: "Center at AP -1.5, ML 3.3, DV -4.8 from bregma. Approach vertically or at slight angle to avoid hippocampus. Distinguished from lateral amygdala (dorsal) and central amygdala (dorsomedial) by cytoarchitecture.",
    },
    Entry {
        id: "CEA",
        allen_id: 536,
        name: "Central Amygdala",
        group: RegionGroup::Subcortical,
        bilateral: true,
        connections: ["BLA", "HY", "PAG", "LHA"],
        description: "Main output nucleus of the amygdala, orchestrating fear and defensive behavioral responses. Contains GABAergic neurons that project to brainstem and hypothalamic effector regions controlling freezing, autonomic responses, and stress hormones.",
        surgical_notes: "Center at AP -1.2, ML 2.8, DV -4.5 from bregma. Sits dorsomedial to BLA. Small nucleus; use fine-tipped pipettes and small injection volumes (50-100 nL) to avoid spread into adjacent BLA.",
    },
    Entry {
        id: "GPe",
        allen_id: 1022,
        name: "Globus Pallidus, external segment",
        group: RegionGroup::Subcortical,
        bilateral: true,
        connections: ["CP", "TH", "SNc", "ACB"],
        description: "Key node in the basal ganglia indirect pathway. Receives GABAergic input from striatal D2-MSNs and provides tonic inhibition to the subthalamic nucleus. Dysfunction contributes to parkinsonian akinesia.",
        surgical_notes: "Center at AP -0.3, ML 2.0, DV -3.8 from bregma. Medial to striatum, lateral to internal capsule. High-frequency firing neurons (~50 Hz) are electrophysiologically distinctive and aid targeting.",
    },
    Entry {
        id: "CLA",
        allen_id: 583,
        name: "Claustrum",
        group: RegionGroup::Subcortical,
        bilateral: true,
        connections: ["MOp", "SSp", "ACA", "VIS"],
        description: "Thin sheet of gray matter between insular cortex and striatum with widespread reciprocal cortical connections. Hypothesized to coordinate conscious percepts by synchronizing cortical activity across modalities.",
        surgical_notes: "Center at AP +0.5, ML 3.5, DV -2.5 from bregma. Extremely thin structure (~0.1-0.2 mm); precise targeting is challenging. Use retrograde tracers from cortex or Cre-driver lines (Gnb4-Cre) for specificity.",
    },
    // Thalamus and hypothalamus
    Entry {
        id: "TH",
        allen_id: 549,
        name: "Thalamus",
        group: RegionGroup::Thalamus,
        bilateral: true,
        connections: ["SSp", "VIS", "MOp", "HIP"],
        description: "Major relay center of the diencephalon. Nearly all sensory and motor information passes through thalamic nuclei en route to cortex. Also plays active roles in attention, consciousness, and cortico-thalamo-cortical loops.",
        surgical_notes: "Center at AP -1.5, ML 1.0, DV -3.5 from bregma. Large structure with many subnuclei; specify target nucleus (e.g., VPM, MD, LD) for precise work. Passes near the third ventricle medially.",
    },
    Entry {
        id: "HY",
        allen_id: 1097,
        name: "Hypothalamus",
        group: RegionGroup::Thalamus,
        bilateral: true,
        connections: ["LHA", "PVH", "ILA", "CEA"],
        description: "Master regulator of homeostasis controlling feeding, thermoregulation, circadian rhythms, stress responses, and reproductive behavior. Contains neuroendocrine neurons projecting to pituitary gland.",
        surgical_notes: "Center at AP -1.0, ML 0.5, DV -5.0 from bregma. Deep ventral structure near the base of the brain. Use long, thin cannulae. Third ventricle lies medially; slight lateral offset avoids it.",
    },
    Entry {
        id: "LHA",
        allen_id: 194,
        name: "Lateral Hypothalamic Area",
        group: RegionGroup::Thalamus,
        bilateral: true,
        connections: ["HY", "VTA", "ACB", "CEA"],
        description: "Contains orexin/hypocretin and MCH neurons critical for arousal, feeding motivation, and reward seeking. Historically called the \"hunger center\"; lesions cause aphagia and adipsia.",
        surgical_notes: "Center at AP -1.5, ML 1.2, DV -5.2 from bregma. Lateral to fornix, which serves as a landmark. Orexin neurons are scattered; larger injection volumes may be needed for full coverage.",
    },
    Entry {
        id: "PVH",
        allen_id: 38,
        name: "Paraventricular Hypothalamic Nucleus",
        group: RegionGroup::Thalamus,
        bilateral: false,
        connections: ["HY", "LHA", "PAG", "ILA"],
        description: "Key neuroendocrine nucleus containing CRH neurons that initiate the HPA stress axis, and oxytocin/vasopressin neurons projecting to posterior pituitary. Also sends descending autonomic projections to brainstem.",
        surgical_notes: "Center at AP -0.8, ML 0.2, DV -4.8 from bregma. Adjacent to the third ventricle; use small volumes (25-50 nL) to prevent ventricular spread. Midline approach with slight lateral offset.",
    },
    // Midbrain
    Entry {
        id: "VTA",
        allen_id: 749,
        name: "Ventral Tegmental Area",
        group: RegionGroup::Midbrain,
        bilateral: true,
        connections: ["ACB", "PL", "LHA", "SNc"],
        description: "Primary source of mesocorticolimbic dopamine. DA neurons projecting to nucleus accumbens and prefrontal cortex mediate reward prediction error, motivation, and reinforcement learning.",
        surgical_notes: "Center at AP -3.2, ML 0.5, DV -4.4 from bregma. Sits medial to SNc on the ventral midbrain floor. Use angled approach (10 degrees) to avoid aqueduct. DA neurons identifiable by low firing rate and wide spike waveform.",
    },
    Entry {
        id: "SNc",
        allen_id: 381,
        name: "Substantia Nigra pars compacta",
        group: RegionGroup::Midbrain,
        bilateral: true,
        connections: ["CP", "GPe", "VTA", "TH"],
        description: "Melanin-containing dopaminergic nucleus whose nigrostriatal projections are essential for voluntary movement initiation. Selective degeneration of SNc DA neurons is the hallmark of Parkinson disease.",
        surgical_notes: "Center at AP -3.2, ML 1.5, DV -4.2 from bregma. Lateral to VTA; the two are distinguished by ML coordinate. Use TH immunostaining or DAT-Cre mice for specific targeting. Pars reticulata lies ventral.",
    },
    Entry {
        id: "PAG",
        allen_id: 795,
        name: "Periaqueductal Gray",
        group: RegionGroup::Midbrain,
        bilateral: false,
        connections: ["CEA", "PVH", "HY", "LC"],
        description: "Midbrain structure surrounding the cerebral aqueduct that coordinates defensive behaviors (fight, flight, freeze), endogenous analgesia via descending pain modulation, and vocalization.",
        surgical_notes: "Center at AP -4.0, ML 0.3, DV -2.5 from bregma. Surrounds the aqueduct; approach from dorsal surface at steep angle. Columns (dorsal, lateral, ventrolateral) have distinct functions — specify target column.",
    },
    Entry {
        id: "SCm",
        allen_id: 294,
        name: "Superior Colliculus, motor layers",
        group: RegionGroup::Midbrain,
        bilateral: true,
        connections: ["VIS", "PAG", "TH", "SNc"],
        description: "Deep layers of the superior colliculus generating orienting movements including saccades, head turns, and whisker movements toward salient stimuli. Receives converging visual, auditory, and somatosensory input.",
        surgical_notes: "Center at AP -3.8, ML 1.0, DV -1.8 from bregma. Dorsal midbrain structure; accessible from above after removing overlying cortex or through a small craniotomy near lambda. Motor layers are deep (>0.5 mm from surface).",
    },
    // Hindbrain
    Entry {
        id: "CB",
        allen_id: 512,
        name: "Cerebellum",
        group: RegionGroup::Hindbrain,
        bilateral: true,
        connections: ["MOp", "TH", "VIS", "SCm"],
        description: "Contains more than half of all brain neurons. Purkinje cells integrate massive parallel fiber and climbing fiber inputs to calibrate motor timing, coordination, and motor learning. Increasingly recognized for cognitive and affective roles.",
        surgical_notes: "Center at AP -6.5, ML 0.0, DV -2.0 from bregma. Large posterior structure; for vermis target midline, for hemispheres offset laterally. Overlying transverse sinus must be avoided during exposure. Lobule-specific targeting requires careful AP/DV coordinates.",
    },
    Entry {
        id: "LC",
        allen_id: 147,
        name: "Locus Coeruleus",
        group: RegionGroup::Hindbrain,
        bilateral: true,
        connections: ["PAG", "PL", "HIP", "CB"],
        description: "Small pontine nucleus and the brain's primary source of norepinephrine. Despite containing only ~1,500 neurons per side in mouse, LC axons innervate virtually the entire forebrain, modulating arousal, attention, and stress responses.",
        surgical_notes: "Center at AP -5.4, ML 0.9, DV -3.7 from bregma. Tiny nucleus (~0.2 mm diameter); stereotaxic precision is critical. TH+ neurons cluster near the fourth ventricle floor. Use small volumes (25-50 nL) and slow injection rates to avoid spread.",
    },
];
