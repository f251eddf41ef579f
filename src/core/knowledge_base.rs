//! # KnowledgeBase — Static Answers
//!
//! The [`KnowledgeBase`] maps every [`Intent`] to one canned answer in
//! Indonesian. The lookup is an exhaustive `match`, so adding an intent
//! without an answer is a compile error rather than a runtime fallback.
//!
//! `Intent::Unknown` maps to [`DEFAULT_RESPONSE`], the same text any
//! unmapped intent would receive.

use crate::nlu::Intent;

/// Answer for questions the bot did not understand.
pub const DEFAULT_RESPONSE: &str = "Maaf, saya belum memahami pertanyaan Anda. 🤔

Coba tanyakan tentang:
• \"Apa itu ekonomi sirkular?\"
• \"Jelaskan prinsip 5R\"
• \"Contoh penerapan ekonomi sirkular\"
• \"Manfaat ekonomi sirkular\"
• \"Apa itu sustainability?\"
• \"Bahaya sampah plastik\"
• \"Tips hidup ramah lingkungan\"

Atau ketik \"bisa apa\" untuk melihat kemampuan saya! 💡";

const GREETING: &str = "Halo! 👋 Saya EcoBuddy, asisten edukasi Ekonomi Sirkular.

Saya bisa membantu Anda memahami:
• Ekonomi Sirkular & prinsipnya
• Sustainability & lingkungan
• Tips hidup ramah lingkungan

Silakan tanya apa saja! 😊";

const IDENTITY: &str = "Saya **EcoBuddy** 🌿, chatbot edukatif yang dirancang untuk membantu Anda memahami Ekonomi Sirkular dan keberlanjutan lingkungan.

Misi saya:
✓ Menjelaskan konsep ekonomi sirkular dengan sederhana
✓ Memberikan tips praktis hidup berkelanjutan
✓ Menjawab pertanyaan tentang lingkungan & sustainability

Saya di sini untuk membuat pembelajaran tentang lingkungan jadi lebih mudah dan menyenangkan! 🌍";

const CAPABILITY: &str = "Saya bisa membantu Anda dengan:

📚 **Edukasi Ekonomi Sirkular:**
• Pengertian & konsep dasar
• Prinsip 3R/5R
• Contoh penerapan
• Manfaat ekonomi sirkular

🌍 **Pengetahuan Sustainability:**
• Sampah plastik & solusinya
• Energi terbarukan
• Perubahan iklim
• Tips hidup ramah lingkungan

💡 **Tips Praktis:**
• Cara menerapkan di rumah
• Pilihan produk eco-friendly
• Kebiasaan berkelanjutan

Tanya saja apa yang ingin Anda ketahui! 😊";

const THANKS: &str = "Sama-sama! 😊 Senang bisa membantu.

Jika ada pertanyaan lain tentang ekonomi sirkular atau sustainability, jangan ragu untuk bertanya ya!

Mari bersama-sama jaga bumi kita! 🌍💚";

const CE_DEFINITION: &str = "🔄 **Ekonomi Sirkular** adalah sistem ekonomi yang bertujuan mengurangi limbah dan memanfaatkan sumber daya secara maksimal.

Berbeda dengan ekonomi linear (ambil-buat-buang), ekonomi sirkular:
• Menjaga produk dan material tetap digunakan selama mungkin
• Memulihkan dan meregenerasi produk di akhir masa pakainya
• Meminimalkan limbah dengan desain yang lebih baik

Analogi sederhana: Seperti siklus air di alam - air tidak \"dibuang\" tapi terus berputar dan digunakan kembali! 💧

Mau tahu lebih dalam tentang prinsip atau contoh penerapannya?";

const CE_PRINCIPLES: &str = "🌱 **Prinsip Utama Ekonomi Sirkular:**

**1. Reduce (Kurangi)** - Minimalkan penggunaan sumber daya
   → Contoh: Beli produk tahan lama, hindari kemasan berlebihan

**2. Reuse (Gunakan Kembali)** - Pakai ulang produk tanpa proses rumit
   → Contoh: Botol kaca untuk tempat penyimpanan, tas belanja kain

**3. Recycle (Daur Ulang)** - Ubah limbah jadi produk baru
   → Contoh: Plastik → paving block, kertas bekas → kertas daur ulang

**4. Repair (Perbaiki)** - Perpanjang usia produk dengan memperbaiki
   → Contoh: Service elektronik, tambal pakaian

**5. Rethink & Redesign** - Pikirkan ulang cara produksi dan konsumsi
   → Contoh: Produk modular yang mudah diperbaiki

Ingat hierarki: Reduce > Reuse > Recycle! ♻️

Ada yang ingin ditanyakan lebih lanjut?";

const CE_EXAMPLES: &str = "💡 **Contoh Penerapan Ekonomi Sirkular:**

**Kehidupan Sehari-hari:**
• Kompos dari sisa makanan untuk pupuk tanaman
• Menggunakan tumbler/botol minum isi ulang
• Belanja di toko zero waste dengan wadah sendiri
• Donasi pakaian bekas ke yang membutuhkan
• Refill produk rumah tangga (sabun, shampoo)

**Industri:**
• **Fashion**: H&M & Zara - program take-back pakaian lama
• **Elektronik**: Apple - program trade-in dan daur ulang komponen
• **Otomotif**: Renault - daur ulang 95% komponen mobil
• **Kemasan**: Loop - sistem kemasan isi ulang premium
• **Furnitur**: IKEA - buyback & resell furnitur bekas

**Inovasi Menarik:**
• Adidas membuat sepatu dari plastik laut
• Too Good To Go - aplikasi selamatkan makanan surplus
• Patagonia memperbaiki produk secara gratis

Mulai dari hal kecil di rumah! 🏠 Mau tips praktis untuk memulai?";

const CE_BENEFITS: &str = "✨ **Manfaat Ekonomi Sirkular:**

**🌍 Lingkungan:**
• Mengurangi emisi gas rumah kaca hingga 45%
• Menghemat sumber daya alam yang terbatas
• Mengurangi pencemaran tanah, air, dan udara
• Melindungi keanekaragaman hayati

**💰 Ekonomi:**
• Hemat biaya produksi (gunakan material daur ulang)
• Ciptakan lapangan kerja baru (industri daur ulang, repair)
• Potensi ekonomi global USD 4.5 triliun pada 2030
• Tingkatkan daya saing bisnis

**👥 Sosial:**
• Memberdayakan komunitas lokal
• Meningkatkan kesehatan masyarakat
• Menciptakan pola konsumsi yang lebih bijak
• Membangun kesadaran lingkungan sejak dini

Indonesia bisa hemat Rp 593 triliun per tahun jika menerapkan ekonomi sirkular! 🇮🇩

Tertarik untuk mulai menerapkannya?";

const CE_GENERAL: &str = "🔄 **Ekonomi Sirkular** adalah sistem yang mengubah pola konsumsi dari \"ambil-buat-buang\" menjadi \"gunakan-pulihkan-gunakan lagi\".

Saya bisa jelaskan lebih detail tentang:
• Pengertian dan konsep dasar
• Prinsip-prinsip utama (3R/5R)
• Contoh penerapan nyata
• Manfaat bagi lingkungan dan ekonomi

Apa yang ingin Anda ketahui lebih lanjut? 😊";

const SUSTAINABILITY_GENERAL: &str = "🌍 **Sustainability (Keberlanjutan)** adalah kemampuan memenuhi kebutuhan saat ini tanpa mengorbankan kemampuan generasi masa depan.

**Tiga Pilar Sustainability:**
• **Planet** 🌱 - Jaga lingkungan & ekosistem
• **People** 👥 - Kesejahteraan sosial & keadilan
• **Profit** 💼 - Pertumbuhan ekonomi yang bertanggung jawab

Contoh: Menggunakan energi terbarukan (solar panel) adalah keberlanjutan karena tidak habis dan tidak merusak lingkungan untuk anak cucu kita.

Ekonomi sirkular adalah salah satu cara mencapai keberlanjutan! Mau tahu lebih lanjut?";

const PLASTIC_WASTE: &str = "🚫 **Fakta Sampah Plastik:**

**Masalah:**
• Indonesia produksi 7.2 juta ton sampah plastik/tahun
• Hanya 10% yang didaur ulang
• Plastik butuh 500-1000 tahun untuk terurai
• 1 juta burung laut & 100,000 mamalia laut mati tiap tahun akibat plastik

**Solusi:**
✓ Gunakan tas belanja kain
✓ Pakai botol minum & sedotan reusable
✓ Hindari kemasan plastik sekali pakai
✓ Pilih produk dengan kemasan ramah lingkungan
✓ Dukung program refill & zero waste

Setiap orang bisa membuat perbedaan! 💪

Butuh tips lebih praktis untuk mengurangi plastik?";

const RENEWABLE_ENERGY: &str = "☀️ **Energi Terbarukan** adalah energi dari sumber yang tidak habis dan dapat diperbaharui secara alami.

**Jenis-jenis:**
• **Surya** (Solar) - Panel surya tangkap sinar matahari
• **Angin** (Wind) - Turbin konversi angin jadi listrik
• **Air** (Hydro) - PLTA manfaatkan aliran air
• **Biomassa** - Energi dari bahan organik
• **Panas Bumi** (Geothermal) - Indonesia kaya sumber ini!

**Keuntungan:**
✓ Tidak habis & ramah lingkungan
✓ Kurangi emisi karbon
✓ Hemat biaya jangka panjang
✓ Ciptakan lapangan kerja

Indonesia target 23% energi terbarukan pada 2025! 🇮🇩

Mau tahu cara memanfaatkan energi terbarukan di rumah?";

const CLIMATE_CHANGE: &str = "🌡️ **Perubahan Iklim** adalah perubahan jangka panjang pola cuaca dan suhu bumi, terutama akibat aktivitas manusia.

**Penyebab Utama:**
• Pembakaran bahan bakar fosil (batu bara, minyak, gas)
• Deforestasi (penebangan hutan)
• Industri & transportasi
• Pertanian intensif

**Dampak:**
• Suhu bumi naik rata-rata 1.1°C sejak era pra-industri
• Es kutub mencair, permukaan laut naik
• Cuaca ekstrem lebih sering (banjir, kekeringan)
• Ancaman terhadap ekosistem & keanekaragaman hayati

**Apa yang Bisa Kita Lakukan:**
✓ Kurangi penggunaan kendaraan pribadi
✓ Hemat listrik & air
✓ Konsumsi lokal & kurangi daging
✓ Tanam pohon
✓ Dukung kebijakan ramah lingkungan

Setiap tindakan kecil berdampak besar! 🌱 Ekonomi sirkular bisa bantu kurangi dampak perubahan iklim, lho!";

const TIPS: &str = "💚 **Tips Memulai Gaya Hidup Sirkular:**

**Di Rumah:**
1. Bawa tas belanja & botol minum sendiri
2. Pisahkan sampah organik & anorganik
3. Buat kompos dari sisa makanan
4. Gunakan produk reusable (sedotan, food container)
5. Matikan listrik & air saat tidak dipakai

**Saat Belanja:**
1. Pilih produk dengan kemasan minimal
2. Beli seperlunya (avoid impulse buying)
3. Cari produk refill & isi ulang
4. Dukung brand berkelanjutan
5. Beli second-hand jika memungkinkan

**Prinsip Utama:**
• Mulai dari hal kecil & konsisten
• Ajak keluarga & teman
• Jangan perfeksionis - progress lebih penting!

Perubahan dimulai dari diri sendiri! 🌱 Ada area spesifik yang ingin Anda pelajari lebih dalam?";

/// Read-only answer bank. Cheap to construct and `Copy`.
#[derive(Clone, Copy, Debug, Default)]
pub struct KnowledgeBase;

impl KnowledgeBase {
    pub fn new() -> Self {
        Self
    }

    /// Answer text for an intent. Never empty.
    pub fn get_response(&self, intent: Intent) -> &'static str {
        match intent {
            Intent::Greeting => GREETING,
            Intent::Identity => IDENTITY,
            Intent::Capability => CAPABILITY,
            Intent::Thanks => THANKS,
            Intent::CeDefinition => CE_DEFINITION,
            Intent::CePrinciples => CE_PRINCIPLES,
            Intent::CeExamples => CE_EXAMPLES,
            Intent::CeBenefits => CE_BENEFITS,
            Intent::CeGeneral => CE_GENERAL,
            Intent::SustainabilityGeneral => SUSTAINABILITY_GENERAL,
            Intent::PlasticWaste => PLASTIC_WASTE,
            Intent::RenewableEnergy => RENEWABLE_ENERGY,
            Intent::ClimateChange => CLIMATE_CHANGE,
            Intent::Tips => TIPS,
            Intent::Unknown => DEFAULT_RESPONSE,
        }
    }
}
