//! Built-in genetic code catalog in NCBI `gencode.dmp` layout.

/// Default catalog: id, abbreviation, name, amino acids, start markers.
///
/// Entry 0 ("Unspecified") carries blank tables and is skipped on load.
pub const DEFAULT_CATALOG: &str = concat!(
    "0\t|\t\t|\tUnspecified\t|\t                                                                 \t|\t                                                                 \t|\n",
    "1\t|\t\t|\tStandard\t|\tFFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG \t|\t---M---------------M---------------M---------------------------- \t|\n",
    "2\t|\t\t|\tVertebrate Mitochondrial\t|\tFFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSS**VVVVAAAADDEEGGGG \t|\t--------------------------------MMMM---------------M------------ \t|\n",
    "3\t|\t\t|\tYeast Mitochondrial\t|\tFFLLSSSSYY**CCWWTTTTPPPPHHQQRRRRIIMMTTTTNNKKSSRRVVVVAAAADDEEGGGG \t|\t----------------------------------MM---------------------------- \t|\n",
    "4\t|\t\t|\tMold Mitochondrial; Protozoan Mitochondrial; Coelenterate Mitochondrial; Mycoplasma; Spiroplasma\t|\tFFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG \t|\t--MM---------------M------------MMMM---------------M------------ \t|\n",
    "5\t|\t\t|\tInvertebrate Mitochondrial\t|\tFFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSSSSVVVVAAAADDEEGGGG \t|\t---M----------------------------MMMM---------------M------------ \t|\n",
    "6\t|\t\t|\tCiliate Nuclear; Dasycladacean Nuclear; Hexamita Nuclear\t|\tFFLLSSSSYYQQCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG \t|\t-----------------------------------M---------------------------- \t|\n",
    "9\t|\t\t|\tEchinoderm Mitochondrial; Flatworm Mitochondrial\t|\tFFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNNKSSSSVVVVAAAADDEEGGGG \t|\t-----------------------------------M---------------M------------ \t|\n",
    "10\t|\t\t|\tEuplotid Nuclear\t|\tFFLLSSSSYY**CCCWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG \t|\t-----------------------------------M---------------------------- \t|\n",
    "11\t|\t\t|\tBacterial, Archaeal and Plant Plastid\t|\tFFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG \t|\t---M---------------M------------MMMM---------------M------------ \t|\n",
    "12\t|\t\t|\tAlternative Yeast Nuclear\t|\tFFLLSSSSYY**CC*WLLLSPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG \t|\t-------------------M---------------M---------------------------- \t|\n",
    "13\t|\t\t|\tAscidian Mitochondrial\t|\tFFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSSGGVVVVAAAADDEEGGGG \t|\t---M------------------------------MM---------------M------------ \t|\n",
    "14\t|\t\t|\tAlternative Flatworm Mitochondrial\t|\tFFLLSSSSYYY*CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNNKSSSSVVVVAAAADDEEGGGG \t|\t-----------------------------------M---------------------------- \t|\n",
    "15\t|\t\t|\tBlepharisma Macronuclear\t|\tFFLLSSSSYY*QCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG \t|\t-----------------------------------M---------------------------- \t|\n",
    "16\t|\t\t|\tChlorophycean Mitochondrial\t|\tFFLLSSSSYY*LCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG \t|\t-----------------------------------M---------------------------- \t|\n",
    "21\t|\t\t|\tTrematode Mitochondrial\t|\tFFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNNKSSSSVVVVAAAADDEEGGGG \t|\t-----------------------------------M---------------M------------ \t|\n",
    "22\t|\t\t|\tScenedesmus obliquus mitochondrial\t|\tFFLLSS*SYY*LCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG \t|\t-----------------------------------M---------------------------- \t|\n",
    "23\t|\t\t|\tThraustochytrium mitochondrial code\t|\tFF*LSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG \t|\t--------------------------------M--M---------------M------------ \t|\n",
    "24\t|\t\t|\tPterobranchia Mitochondrial\t|\tFFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSSKVVVVAAAADDEEGGGG \t|\t---M---------------M---------------M---------------M------------ \t|\n",
    "25\t|\t\t|\tCandidate Division SR1 and Gracilibacteria\t|\tFFLLSSSSYY**CCGWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG \t|\t---M-------------------------------M---------------M------------ \t|\n",
);
