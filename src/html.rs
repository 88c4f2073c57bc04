//! HTML content for the glimmerweb UI.
//!
//! Exports the tutorial page (`INDEX_PAGE`) as a static blob. Keeping the
//! markup here avoids runtime template dependencies; the page pulls its
//! interactive behaviour from `/static/script.js`.
//!
/// HTML page for the GLIMMER photo album tutorial
pub const INDEX_PAGE: &str = r##"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>GLIMMER - Tutorial: Crea tu Álbum de Fotos</title>
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css">

    <style>
        :root {
            --light-blue: #a8d8ea;
            --butter-yellow: #f7dc6f;
            --dark-gray: #343a40;
            --soft-white: #fdfefe;
            --warm-pink: #f5b7b1;
        }

        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background: var(--soft-white);
            color: var(--dark-gray);
            line-height: 1.6;
        }

        /* Reading progress bar */
        .progress-container {
            position: fixed;
            top: 0;
            left: 0;
            width: 100%;
            height: 5px;
            background: rgba(0, 0, 0, 0.08);
            z-index: 1000;
        }

        .progress-bar {
            height: 100%;
            width: 0;
            background: linear-gradient(90deg, var(--light-blue), var(--butter-yellow));
        }

        /* Hero */
        .hero {
            background: linear-gradient(135deg, var(--light-blue), var(--butter-yellow));
            text-align: center;
            padding: 5rem 1rem 4rem;
        }

        .hero h1 {
            font-size: 3.2rem;
            letter-spacing: 4px;
            color: white;
            text-shadow: 0 2px 8px rgba(0, 0, 0, 0.2);
        }

        .hero p {
            font-size: 1.2rem;
            color: white;
            margin-top: 0.8rem;
        }

        .hero nav {
            margin-top: 1.8rem;
        }

        .hero nav a {
            color: white;
            text-decoration: none;
            margin: 0 0.8rem;
            font-weight: 600;
            border-bottom: 2px solid transparent;
        }

        .hero nav a:hover {
            border-bottom-color: white;
        }

        main {
            max-width: 900px;
            margin: 0 auto;
            padding: 2rem 1rem;
        }

        section {
            margin-bottom: 3rem;
        }

        section h2 {
            text-align: center;
            margin-bottom: 1.5rem;
            font-size: 2rem;
        }

        section h2 i {
            color: var(--light-blue);
            margin-right: 0.5rem;
        }

        /* Cards */
        .intro-card,
        .tip-card,
        .step-card {
            background: white;
            border-radius: 15px;
            box-shadow: 0 4px 15px rgba(0, 0, 0, 0.08);
            padding: 1.8rem;
            margin-bottom: 1.5rem;
        }

        .intro-card {
            border-left: 6px solid var(--light-blue);
        }

        .tip-card {
            border-left: 6px solid var(--butter-yellow);
        }

        .step-card {
            cursor: pointer;
            transition: transform 0.3s ease, box-shadow 0.3s ease;
        }

        .step-card:hover {
            box-shadow: 0 8px 25px rgba(0, 0, 0, 0.12);
        }

        .step-header {
            display: flex;
            align-items: center;
            gap: 1rem;
        }

        .step-number {
            background: var(--light-blue);
            color: white;
            width: 42px;
            height: 42px;
            border-radius: 50%;
            display: flex;
            align-items: center;
            justify-content: center;
            font-weight: bold;
            font-size: 1.2rem;
            flex-shrink: 0;
        }

        .step-header h3 {
            font-size: 1.3rem;
        }

        .step-header .step-icon {
            color: var(--warm-pink);
            font-size: 1.4rem;
            margin-left: auto;
        }

        .step-content {
            overflow: hidden;
            max-height: 0;
            transition: max-height 0.4s ease;
        }

        .step-card.expanded .step-content {
            margin-top: 1.2rem;
        }

        .step-content h4 {
            margin: 1rem 0 0.5rem;
            color: var(--dark-gray);
        }

        .materials-list {
            list-style: none;
        }

        .materials-list li {
            padding: 0.3rem 0;
        }

        .materials-list i {
            color: var(--light-blue);
            margin-right: 0.6rem;
            cursor: pointer;
        }

        .instruction-list {
            padding-left: 1.4rem;
        }

        .instruction-list li {
            padding: 0.3rem 0;
            cursor: pointer;
        }

        /* Scroll animations */
        .fade-in {
            opacity: 0;
            transform: translateY(25px);
            transition: opacity 0.6s ease, transform 0.6s ease;
        }

        .fade-in.visible {
            opacity: 1;
            transform: translateY(0);
        }

        .step-completed {
            border-left: 6px solid #28a745;
        }

        footer {
            background: var(--dark-gray);
            color: var(--soft-white);
            text-align: center;
            padding: 2rem 1rem;
        }

        footer i {
            color: var(--warm-pink);
        }

        @media (max-width: 600px) {
            .hero h1 {
                font-size: 2.2rem;
            }

            .step-header h3 {
                font-size: 1.05rem;
            }
        }
    </style>
</head>
<body>
    <div class="progress-container">
        <div class="progress-bar" id="progressBar"></div>
    </div>

    <header class="hero">
        <h1><i class="fas fa-camera-retro"></i> GLIMMER</h1>
        <p>Tutorial paso a paso: crea tu propio álbum de fotos artesanal</p>
        <nav>
            <a href="#introduccion">Introducción</a>
            <a href="#pasos">Pasos</a>
            <a href="#consejos">Consejos</a>
        </nav>
    </header>

    <main>
        <section id="introduccion">
            <h2><i class="fas fa-heart"></i>Bienvenido</h2>
            <div class="intro-card">
                <p>Un álbum de fotos hecho a mano guarda mucho más que imágenes:
                conserva momentos, texturas y dedicación. En este tutorial
                GLIMMER aprenderás a crear el tuyo desde cero, con materiales
                sencillos y resultados preciosos.</p>
            </div>
            <div class="intro-card">
                <p><i class="fas fa-clock"></i> <strong>Tiempo estimado:</strong>
                una tarde tranquila (3 a 4 horas).
                <br>
                <i class="fas fa-signal"></i> <strong>Dificultad:</strong>
                principiante, no necesitas experiencia previa.</p>
            </div>
        </section>

        <section id="pasos">
            <h2><i class="fas fa-list-ol"></i>Los Pasos</h2>

            <div class="step-card">
                <div class="step-header">
                    <div class="step-number">1</div>
                    <h3>Reúne tus materiales</h3>
                    <i class="fas fa-box-open step-icon"></i>
                </div>
                <div class="step-content">
                    <h4>Materiales</h4>
                    <ul class="materials-list">
                        <li><i class="far fa-square"></i>Cartulina gruesa (portada y contraportada)</li>
                        <li><i class="far fa-square"></i>Papel kraft o cartulinas de colores (páginas)</li>
                        <li><i class="far fa-square"></i>Tijeras y regla metálica</li>
                        <li><i class="far fa-square"></i>Pegamento en barra y cinta doble cara</li>
                        <li><i class="far fa-square"></i>Cinta, cordel o anillas para encuadernar</li>
                    </ul>
                    <h4>Instrucciones</h4>
                    <ol class="instruction-list">
                        <li>Despeja una mesa amplia y con buena luz.</li>
                        <li>Agrupa los materiales por tipo antes de empezar.</li>
                        <li>Protege la superficie con papel de periódico.</li>
                    </ol>
                </div>
            </div>

            <div class="step-card">
                <div class="step-header">
                    <div class="step-number">2</div>
                    <h3>Selecciona e imprime tus fotos</h3>
                    <i class="fas fa-images step-icon"></i>
                </div>
                <div class="step-content">
                    <h4>Materiales</h4>
                    <ul class="materials-list">
                        <li><i class="far fa-square"></i>Entre 20 y 30 fotos favoritas</li>
                        <li><i class="far fa-square"></i>Papel fotográfico mate o brillante</li>
                    </ul>
                    <h4>Instrucciones</h4>
                    <ol class="instruction-list">
                        <li>Elige fotos que cuenten una historia en orden.</li>
                        <li>Imprime en tamaño 10x15 cm o menor para collages.</li>
                        <li>Deja secar las impresiones antes de manipularlas.</li>
                    </ol>
                </div>
            </div>

            <div class="step-card">
                <div class="step-header">
                    <div class="step-number">3</div>
                    <h3>Diseña la portada</h3>
                    <i class="fas fa-palette step-icon"></i>
                </div>
                <div class="step-content">
                    <h4>Materiales</h4>
                    <ul class="materials-list">
                        <li><i class="far fa-square"></i>Cartulina de portada</li>
                        <li><i class="far fa-square"></i>Rotuladores, sellos o letras adhesivas</li>
                    </ul>
                    <h4>Instrucciones</h4>
                    <ol class="instruction-list">
                        <li>Corta dos tapas iguales, 1 cm mayores que las páginas.</li>
                        <li>Escribe el título y decora con un motivo central.</li>
                        <li>Forra las tapas si quieres un acabado más duradero.</li>
                    </ol>
                </div>
            </div>

            <div class="step-card">
                <div class="step-header">
                    <div class="step-number">4</div>
                    <h3>Organiza las páginas</h3>
                    <i class="fas fa-layer-group step-icon"></i>
                </div>
                <div class="step-content">
                    <h4>Materiales</h4>
                    <ul class="materials-list">
                        <li><i class="far fa-square"></i>Páginas cortadas al mismo tamaño</li>
                        <li><i class="far fa-square"></i>Fotos impresas del paso anterior</li>
                    </ul>
                    <h4>Instrucciones</h4>
                    <ol class="instruction-list">
                        <li>Distribuye las fotos antes de pegar nada.</li>
                        <li>Alterna páginas con una foto grande y collages.</li>
                        <li>Deja espacio para notas y fechas junto a cada foto.</li>
                    </ol>
                </div>
            </div>

            <div class="step-card">
                <div class="step-header">
                    <div class="step-number">5</div>
                    <h3>Encuaderna el álbum</h3>
                    <i class="fas fa-book step-icon"></i>
                </div>
                <div class="step-content">
                    <h4>Materiales</h4>
                    <ul class="materials-list">
                        <li><i class="far fa-square"></i>Perforadora</li>
                        <li><i class="far fa-square"></i>Cinta, cordel o anillas</li>
                    </ul>
                    <h4>Instrucciones</h4>
                    <ol class="instruction-list">
                        <li>Alinea tapas y páginas con pinzas.</li>
                        <li>Perfora dos o tres agujeros en el lomo.</li>
                        <li>Pasa la cinta y ata con un lazo firme pero flexible.</li>
                    </ol>
                </div>
            </div>

            <div class="step-card">
                <div class="step-header">
                    <div class="step-number">6</div>
                    <h3>Añade los toques finales</h3>
                    <i class="fas fa-wand-magic-sparkles step-icon"></i>
                </div>
                <div class="step-content">
                    <h4>Materiales</h4>
                    <ul class="materials-list">
                        <li><i class="far fa-square"></i>Washi tape, pegatinas, flores secas</li>
                        <li><i class="far fa-square"></i>Bolígrafo de tinta permanente</li>
                    </ul>
                    <h4>Instrucciones</h4>
                    <ol class="instruction-list">
                        <li>Escribe pies de foto y pequeñas anécdotas.</li>
                        <li>Decora sin recargar: menos es más.</li>
                        <li>Firma la última página con la fecha de creación.</li>
                    </ol>
                </div>
            </div>
        </section>

        <section id="consejos">
            <h2><i class="fas fa-lightbulb"></i>Consejos</h2>
            <div class="tip-card">
                <p><i class="fas fa-droplet"></i> Usa poca cantidad de pegamento:
                el exceso ondula el papel fotográfico.</p>
            </div>
            <div class="tip-card">
                <p><i class="fas fa-sun"></i> Guarda el álbum lejos de la luz
                directa para que las fotos no pierdan color.</p>
            </div>
            <div class="tip-card">
                <p><i class="fas fa-people-group"></i> Hacerlo en compañía lo
                convierte en un recuerdo doble: el álbum y la tarde juntos.</p>
            </div>
        </section>
    </main>

    <footer>
        <p>Hecho con <i class="fas fa-heart"></i> por el equipo GLIMMER</p>
    </footer>

    <script src="/static/script.js"></script>
</body>
</html>"##;

#[cfg(test)]
mod tests {
    use super::INDEX_PAGE;

    /// The embedded page carries the markers the script relies on
    #[test]
    fn index_page_markers() {
        assert!(INDEX_PAGE.starts_with("<!DOCTYPE html>"));
        assert!(INDEX_PAGE.contains("GLIMMER"));
        assert!(INDEX_PAGE.contains("id=\"progressBar\""));
        assert!(INDEX_PAGE.contains("step-card"));
        assert!(INDEX_PAGE.contains("/static/script.js"));
    }
}
